// SPDX-License-Identifier: MPL-2.0
//! Visual constants shared by every widget on the page.
//!
//! Styles read colors, spacing and sizes from here instead of repeating
//! literals, so the brand palette (wine on stone, rose accents) lives in one
//! place.
//!
//! ```
//! use render_folio::ui::design_tokens::{opacity, palette};
//! use iced::Color;
//!
//! let backdrop = Color { a: opacity::BACKDROP, ..palette::BLACK };
//! assert!(backdrop.a < 1.0);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Brand wine (#4B212C): text, headings, spinner arc.
    pub const WINE: Color = Color::from_rgb(0.294, 0.129, 0.173);

    /// Brand rose (#DBA9B8): stars and accents.
    pub const ROSE: Color = Color::from_rgb(0.859, 0.663, 0.722);

    // Stone scale
    pub const STONE_50: Color = Color::from_rgb(0.980, 0.980, 0.976);
    pub const STONE_100: Color = Color::from_rgb(0.961, 0.961, 0.957);
    pub const STONE_200: Color = Color::from_rgb(0.906, 0.898, 0.894);
    pub const STONE_300: Color = Color::from_rgb(0.839, 0.827, 0.820);
    pub const STONE_600: Color = Color::from_rgb(0.341, 0.325, 0.306);
    pub const STONE_900: Color = Color::from_rgb(0.110, 0.098, 0.090);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.1;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Scrolled navbar surface.
    pub const SURFACE: f32 = 0.9;

    /// Lightbox backdrop.
    pub const BACKDROP: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
    pub const XXXL: f32 = 96.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 40.0;

    /// Loading spinner diameter.
    pub const SPINNER: f32 = 24.0;

    /// Minimum height of the failed-image placeholder.
    pub const PLACEHOLDER_MIN_HEIGHT: f32 = 200.0;

    /// Page content max width.
    pub const CONTENT_MAX_WIDTH: f32 = 1280.0;

    /// Project description max width.
    pub const PROSE_MAX_WIDTH: f32 = 768.0;

    /// Hero paragraph max width.
    pub const HERO_MAX_WIDTH: f32 = 672.0;

    /// Lightbox image max width.
    pub const LIGHTBOX_MAX_WIDTH: f32 = 1280.0;

    /// Lightbox image max height as a fraction of the window height.
    pub const LIGHTBOX_MAX_HEIGHT_RATIO: f32 = 0.9;

    // Masonry breakpoints
    pub const BREAKPOINT_MD: f32 = 768.0;
    pub const BREAKPOINT_LG: f32 = 1024.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: project titles
    //! - Title: navbar brand
    //! - Body: hero and descriptions
    //! - Caption: footer

    /// Project title headings.
    pub const DISPLAY: f32 = 48.0;

    /// Navbar brand.
    pub const TITLE: f32 = 26.0;

    /// Hero paragraph.
    pub const BODY_LG: f32 = 19.0;

    /// Project descriptions.
    pub const BODY: f32 = 17.0;

    /// Footer link.
    pub const BODY_SM: f32 = 14.0;

    /// Copyright line.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.15);

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADOW,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 2.0,
    };

    pub const LG: Shadow = Shadow {
        color: SHADOW,
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 15.0,
    };

    pub const XXL: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
        offset: Vector { x: 0.0, y: 25.0 },
        blur_radius: 50.0,
    };
}

// Scales must stay ordered.
const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::BREAKPOINT_LG > sizing::BREAKPOINT_MD);
    assert!(sizing::LIGHTBOX_MAX_HEIGHT_RATIO > 0.0 && sizing::LIGHTBOX_MAX_HEIGHT_RATIO <= 1.0);

    assert!(typography::DISPLAY > typography::TITLE);
    assert!(typography::TITLE > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_colors_match_hex() {
        let to_byte = |c: f32| (c * 255.0).round() as u8;
        let wine = palette::WINE;
        assert_eq!((to_byte(wine.r), to_byte(wine.g), to_byte(wine.b)), (0x4B, 0x21, 0x2C));
        let rose = palette::ROSE;
        assert_eq!((to_byte(rose.r), to_byte(rose.g), to_byte(rose.b)), (0xDB, 0xA9, 0xB8));
    }
}
