// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the embedded brand SVG at runtime to produce a RGBA icon for
//! the window title bar. Falls back to `None` if rendering fails.

use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rasterized icon.
const ICON_SIZE: u32 = 128;

/// Embedded so packaging does not need to locate assets on disk.
const SVG_SOURCE: &str = include_str!("../assets/branding/render_folio.svg");

/// Rasterize the embedded SVG icon to a square RGBA buffer.
pub fn load_window_icon() -> Option<Icon> {
    let pixels = rasterize(ICON_SIZE)?;
    match icon::from_rgba(pixels, ICON_SIZE, ICON_SIZE) {
        Ok(icon) => Some(icon),
        Err(err) => {
            tracing::warn!(%err, "window icon rejected");
            None
        }
    }
}

fn rasterize(size: u32) -> Option<Vec<u8>> {
    let tree = match usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            tracing::warn!(%err, "window icon SVG could not be parsed");
            return None;
        }
    };

    let source_size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / source_size.width(),
        size as f32 / source_size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap.take())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_svg_rasterizes_to_requested_size() {
        let pixels = rasterize(32).expect("icon renders");
        assert_eq!(pixels.len(), 32 * 32 * 4);
        assert!(pixels.chunks_exact(4).any(|px| px[3] > 0));
    }

    #[test]
    fn window_icon_loads() {
        assert!(load_window_icon().is_some());
    }
}
