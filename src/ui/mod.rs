// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `ViewContext` and a `view` function, and interactive ones add
//! a `Message`/`Event` pair with an `update` function.
//!
//! # Page sections
//!
//! - [`navbar`] - Top bar with the author's name
//! - [`prose`] - Hero paragraph and project descriptions
//! - [`gallery_grid`] - Masonry grid of render tiles
//! - [`lightbox`] - Full-window viewer for the selected render
//! - [`footer`] - "Back to top" link and copyright
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state machines (visibility, image loading, selection, scroll)
//! - [`image_frame`] - Shared rendering of an image slot
//! - [`widgets`] - Custom Iced widgets (reveal, star field, spinner)
//! - [`styles`] - Centralized styling (buttons, containers, svg)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - SVG icon loading and rendering

pub mod design_tokens;
pub mod footer;
pub mod gallery_grid;
pub mod icons;
pub mod image_frame;
pub mod lightbox;
pub mod navbar;
pub mod prose;
pub mod state;
pub mod styles;
pub mod widgets;
