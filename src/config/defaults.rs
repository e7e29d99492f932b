// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Reveal**: Scroll-triggered fade-in of page sections
//! - **Motion**: Durations of the other page animations
//! - **Navigation**: Navbar scroll threshold
//! - **Network**: Remote image fetching limits
//! - **Ambient**: Background star field

use std::time::Duration;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Default margin applied to every viewport edge before the intersection
/// test. Negative values shrink the viewport so sections reveal slightly
/// after they geometrically enter it.
pub const DEFAULT_REVEAL_MARGIN_PX: f32 = -50.0;

/// Smallest accepted reveal margin.
pub const MIN_REVEAL_MARGIN_PX: f32 = -400.0;

/// Largest accepted reveal margin.
pub const MAX_REVEAL_MARGIN_PX: f32 = 400.0;

/// Duration of the fade/slide-in transition once a section is revealed.
pub const REVEAL_DURATION: Duration = Duration::from_millis(1000);

/// Extra delay per tile index inside a gallery grid.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(50);

/// Vertical distance a hidden section starts below its resting position.
pub const REVEAL_SLIDE_PX: f32 = 64.0;

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// Fade-in duration of an image once its pixels are available.
pub const IMAGE_FADE: Duration = Duration::from_millis(500);

/// Fade-in duration of the lightbox backdrop.
pub const LIGHTBOX_FADE: Duration = Duration::from_millis(300);

/// Duration of the smooth "back to top" scroll.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(600);

/// Interval of the animation tick while anything is moving.
pub const ANIMATION_FRAME: Duration = Duration::from_millis(16);

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Page offset beyond which the navbar switches to its opaque style.
pub const NAVBAR_SCROLL_THRESHOLD: f32 = 50.0;

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Default per-request timeout for image downloads (in seconds).
pub const DEFAULT_NETWORK_TIMEOUT_SECS: u32 = 30;

/// Minimum request timeout (in seconds).
pub const MIN_NETWORK_TIMEOUT_SECS: u32 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_NETWORK_TIMEOUT_SECS: u32 = 300;

/// Default decoded-image cache size in megabytes.
pub const DEFAULT_CACHE_MB: u32 = 128;

/// Minimum decoded-image cache size in megabytes.
pub const MIN_CACHE_MB: u32 = 16;

/// Maximum decoded-image cache size in megabytes.
pub const MAX_CACHE_MB: u32 = 1024;

/// Largest response body accepted for a single image.
pub const MAX_IMAGE_BYTES: u64 = 32 * 1024 * 1024;

// ==========================================================================
// Ambient Defaults
// ==========================================================================

/// Number of twinkling stars drawn behind the page.
pub const STAR_COUNT: usize = 24;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_REVEAL_MARGIN_PX < DEFAULT_REVEAL_MARGIN_PX);
    assert!(MAX_REVEAL_MARGIN_PX > DEFAULT_REVEAL_MARGIN_PX);
    assert!(REVEAL_SLIDE_PX > 0.0);

    assert!(NAVBAR_SCROLL_THRESHOLD > 0.0);

    assert!(MIN_NETWORK_TIMEOUT_SECS > 0);
    assert!(DEFAULT_NETWORK_TIMEOUT_SECS >= MIN_NETWORK_TIMEOUT_SECS);
    assert!(DEFAULT_NETWORK_TIMEOUT_SECS <= MAX_NETWORK_TIMEOUT_SECS);

    assert!(MIN_CACHE_MB > 0);
    assert!(DEFAULT_CACHE_MB >= MIN_CACHE_MB);
    assert!(DEFAULT_CACHE_MB <= MAX_CACHE_MB);

    assert!(STAR_COUNT > 0);
};
