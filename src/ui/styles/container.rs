// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK},
    shadow,
};
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Page background.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::STONE_50)),
        text_color: Some(palette::WINE),
        ..Default::default()
    }
}

/// Navbar surface. Transparent at the top of the page, frosted stone with a
/// shadow once scrolled.
pub fn navbar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        if scrolled {
            container::Style {
                background: Some(Background::Color(Color {
                    a: opacity::SURFACE,
                    ..palette::STONE_50
                })),
                text_color: Some(palette::WINE),
                shadow: shadow::SM,
                ..Default::default()
            }
        } else {
            container::Style {
                background: None,
                text_color: Some(palette::WINE),
                ..Default::default()
            }
        }
    }
}

/// Footer band.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::STONE_900)),
        text_color: Some(palette::STONE_300),
        ..Default::default()
    }
}

/// Lightbox backdrop, faded in by `progress` (0.0 - 1.0).
pub fn backdrop(progress: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP * progress.clamp(0.0, 1.0),
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Solid fill, used for image placeholders and hover washes.
pub fn fill(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Lightbox image frame shadow.
pub fn lifted(_theme: &Theme) -> container::Style {
    container::Style {
        shadow: shadow::XXL,
        ..Default::default()
    }
}
