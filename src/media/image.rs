// SPDX-License-Identifier: MPL-2.0
//! Decoding of downloaded renders (PNG, JPEG, GIF, WebP) into GPU-ready handles.

use crate::error::Result;
use iced::widget::image;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Decoded size in bytes (RGBA, 4 bytes per pixel).
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }

    /// Height divided by width, or `None` for a degenerate image.
    #[must_use]
    pub fn aspect(&self) -> Option<f32> {
        if self.width == 0 || self.height == 0 {
            None
        } else {
            Some(self.height as f32 / self.width as f32)
        }
    }
}

/// Decodes encoded image bytes. The format is sniffed from the content.
pub fn decode_bytes(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_raw()))
}
