// SPDX-License-Identifier: MPL-2.0
//! `render_folio` is a portfolio viewer for interior-design renders built
//! with the Iced GUI framework.
//!
//! It shows two project galleries on one scrolling page, reveals sections as
//! they scroll into view and opens a lightbox on click. Images are fetched
//! over HTTPS and kept in a bounded in-memory cache. The UI is localized
//! with Fluent.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod icon;
pub mod media;
pub mod ui;
