// SPDX-License-Identifier: MPL-2.0
//! Remote render loading: download, decode and cache.
//!
//! Downloads run as `Task::perform` futures on the tokio executor; decoding
//! moves to the blocking pool. The cache lives in the application state and
//! is only touched from the update loop.

pub mod cache;
pub mod fetch;
pub mod image;

pub use cache::ImageCache;
pub use fetch::{build_client, fetch_image};
pub use image::{decode_bytes, ImageData};
