// SPDX-License-Identifier: MPL-2.0
//! Navigation bar pinned to the top of the window.
//!
//! It shows the author's name. While the page sits near the top the bar is
//! transparent and roomy; once scrolled it turns into a frosted stone strip
//! with a shadow and tighter padding.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Container, Row, Text},
    Element, Length, Padding,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Whether the page offset is past the scroll threshold.
    pub scrolled: bool,
}

/// Vertical padding of the bar for the given scroll state.
#[must_use]
pub fn vertical_padding(scrolled: bool) -> f32 {
    if scrolled {
        spacing::MD
    } else {
        spacing::XL
    }
}

/// Render the navigation bar. It has no interactive elements.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("navbar-brand"))
        .size(typography::TITLE)
        .color(palette::WINE);

    let row = Row::new()
        .width(Length::Fill)
        .align_y(Vertical::Center)
        .push(brand);

    let content = Container::new(row)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH);

    let inner = Container::new(content)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(Padding {
            top: vertical_padding(ctx.scrolled),
            bottom: vertical_padding(ctx.scrolled),
            left: spacing::LG,
            right: spacing::LG,
        });

    Container::new(inner)
        .width(Length::Fill)
        .style(styles::container::navbar(ctx.scrolled))
        .into()
}
