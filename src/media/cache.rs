// SPDX-License-Identifier: MPL-2.0
//! Decoded image cache keyed by source URL.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used images are evicted first
//! - **Memory-bounded**: Total size limited by the configured byte budget
//! - **Update-loop only**: Touched exclusively from `App::update`, so no locking
//!
//! The lightbox reuses the pixels already fetched for the grid tile, so
//! opening a render normally resolves without another download.

use crate::media::ImageData;
use lru::LruCache;

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    /// Number of images currently in cache.
    pub image_count: usize,

    /// Total bytes currently used by cached images.
    pub total_bytes: usize,

    /// Number of cache hits (image found).
    pub hits: u64,

    /// Number of cache misses (image not found).
    pub misses: u64,

    /// Number of images evicted due to the byte budget.
    pub evictions: u64,
}

impl CacheStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    image: ImageData,
    size_bytes: usize,
}

impl CacheEntry {
    fn new(image: ImageData) -> Self {
        Self {
            size_bytes: image.size_bytes(),
            image,
        }
    }
}

/// Byte-bounded LRU cache of decoded images.
pub struct ImageCache {
    entries: LruCache<&'static str, CacheEntry>,
    max_bytes: usize,
    current_bytes: usize,
    stats: CacheStats,
}

impl ImageCache {
    /// Creates an empty cache holding at most `max_bytes` of pixels.
    #[must_use]
    pub fn new(max_bytes: usize) -> Self {
        Self {
            entries: LruCache::unbounded(),
            max_bytes,
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    /// Inserts an image.
    ///
    /// Returns `false` when the image is larger than half the budget and is
    /// therefore not cached.
    pub fn insert(&mut self, source: &'static str, image: ImageData) -> bool {
        let entry = CacheEntry::new(image);
        let image_size = entry.size_bytes;

        if image_size > self.max_bytes / 2 {
            tracing::debug!(source, image_size, "image too large to cache");
            return false;
        }

        if let Some(existing) = self.entries.pop(source) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        while self.current_bytes + image_size > self.max_bytes {
            match self.entries.pop_lru() {
                Some((evicted_source, evicted)) => {
                    self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
                    self.stats.evictions += 1;
                    tracing::trace!(source = evicted_source, "evicted cached image");
                }
                None => break,
            }
        }

        self.current_bytes += image_size;
        self.entries.put(source, entry);
        self.stats.image_count = self.entries.len();
        self.stats.total_bytes = self.current_bytes;
        true
    }

    /// Gets an image and marks it as most recently used.
    pub fn get(&mut self, source: &str) -> Option<ImageData> {
        match self.entries.get(source) {
            Some(entry) => {
                self.stats.hits += 1;
                tracing::debug!(source, "image cache hit");
                Some(entry.image.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Checks for an image without updating LRU order.
    #[must_use]
    pub fn contains(&self, source: &str) -> bool {
        self.entries.contains(source)
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the current memory usage in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("image_count", &self.entries.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.max_bytes)
            .field("stats", &self.stats)
            .finish()
    }
}
