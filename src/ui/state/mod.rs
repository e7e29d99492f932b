// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the page's UI state logic separated from the main App
//! struct. Each submodule exposes a `handle(Message) -> Effect` state machine.

pub mod image_load;
pub mod scroll;
pub mod selection;
pub mod visibility;

// Re-export commonly used types for convenience
pub use image_load::ImageSlot;
pub use scroll::PageScroll;
pub use selection::Selection;
pub use visibility::{Observation, RootMargin, VisibilityTracker};
