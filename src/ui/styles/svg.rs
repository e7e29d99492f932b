// SPDX-License-Identifier: MPL-2.0
//! SVG icon styles.

use iced::widget::svg;
use iced::{Color, Theme};

/// Recolors an icon, brightening it on hover.
pub fn tinted(normal: Color, hovered: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, status: svg::Status| svg::Style {
        color: Some(match status {
            svg::Status::Hovered => hovered,
            svg::Status::Idle => normal,
        }),
    }
}

/// Applies an opacity factor to an icon of the given color.
pub fn faded(color: Color, alpha: f32) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(Color { a: alpha, ..color }),
    }
}
