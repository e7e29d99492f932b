// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content: the projects and their render tiles.
//!
//! Everything here is compile-time data. Items are never created, mutated,
//! or destroyed at runtime; UI state refers to them by [`ItemId`].

mod catalog;

pub use catalog::PROJECTS;

use std::fmt;

/// Stable identifier of a gallery item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One displayable render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: ItemId,
    pub source_url: &'static str,
    /// Orientation hint, used only to estimate layout before the image loads.
    pub is_vertical: bool,
}

impl GalleryItem {
    const fn new(id: u32, source_url: &'static str, is_vertical: bool) -> Self {
        Self {
            id: ItemId(id),
            source_url,
            is_vertical,
        }
    }

    /// Height-over-width ratio assumed until the real dimensions are known.
    #[must_use]
    pub fn estimated_aspect(&self) -> f32 {
        if self.is_vertical {
            VERTICAL_ASPECT
        } else {
            HORIZONTAL_ASPECT
        }
    }
}

/// Placeholder height/width ratio for portrait renders.
pub const VERTICAL_ASPECT: f32 = 4.0 / 3.0;

/// Placeholder height/width ratio for landscape renders.
pub const HORIZONTAL_ASPECT: f32 = 3.0 / 4.0;

/// Identifies one of the portfolio projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectId {
    CasaSeren,
    RetroFuturo,
}

/// A titled group of renders with its description.
#[derive(Debug)]
pub struct Project {
    pub id: ProjectId,
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub items: &'static [GalleryItem],
}

/// Iterates every item of every project in page order.
pub fn all_items() -> impl Iterator<Item = &'static GalleryItem> {
    PROJECTS.iter().flat_map(|project| project.items.iter())
}

/// Looks up an item by id across all projects.
#[must_use]
pub fn find(id: ItemId) -> Option<&'static GalleryItem> {
    all_items().find(|item| item.id == id)
}
