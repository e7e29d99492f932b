// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Gallery tile: stone placeholder with a larger shadow on hover, faded by
/// `alpha` while the tile is revealed.
///
/// The button only paints the placeholder behind the image. The hover wash
/// lives in [`tile_wash`] because a button background sits below its content.
pub fn tile(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let base = match status {
            button::Status::Hovered | button::Status::Pressed => shadow::LG,
            _ => shadow::SM,
        };
        let shadow = Shadow {
            color: Color {
                a: base.color.a * alpha,
                ..base.color
            },
            ..base
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::STONE_200
            })),
            text_color: palette::WINE,
            border: Border {
                radius: radius::NONE.into(),
                ..Border::default()
            },
            shadow,
            snap: true,
        }
    }
}

/// White wash drawn over a hovered tile.
#[must_use]
pub fn tile_wash(hovered: bool) -> Color {
    Color {
        a: if hovered {
            opacity::OVERLAY_SUBTLE
        } else {
            opacity::TRANSPARENT
        },
        ..WHITE
    }
}

/// Borderless text/icon button (footer "back to top", lightbox close).
pub fn text_link(
    normal: Color,
    hovered: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => hovered,
            _ => normal,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hovered_tile_has_larger_shadow() {
        let theme = Theme::Light;
        let style = tile(1.0);
        let active = style(&theme, button::Status::Active);
        let hovered = style(&theme, button::Status::Hovered);
        assert!(hovered.shadow.blur_radius > active.shadow.blur_radius);
    }

    #[test]
    fn hidden_tile_is_transparent() {
        let style = tile(0.0)(&Theme::Light, button::Status::Active);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, 0.0),
            _ => panic!("expected color background"),
        }
        assert_eq!(style.shadow.color.a, 0.0);
    }

    #[test]
    fn wash_is_transparent_until_hover() {
        assert_eq!(tile_wash(false).a, 0.0);
        assert_eq!(tile_wash(true).a, opacity::OVERLAY_SUBTLE);
    }

    #[test]
    fn text_link_changes_color_on_hover() {
        let style = text_link(palette::STONE_300, WHITE);
        let theme = Theme::Light;
        assert_eq!(style(&theme, button::Status::Active).text_color, palette::STONE_300);
        assert_eq!(style(&theme, button::Status::Hovered).text_color, WHITE);
        assert!(style(&theme, button::Status::Active).background.is_none());
    }
}
