// SPDX-License-Identifier: MPL-2.0
//! Page footer: "back to top" link and copyright line.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length, Padding,
};

/// Contextual data needed to render the footer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the footer.
#[derive(Debug, Clone)]
pub enum Message {
    BackToTop,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ScrollToTop,
}

/// Process a footer message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::BackToTop => Event::ScrollToTop,
    }
}

/// Render the footer.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let label =
        Text::new(ctx.i18n.tr("footer-back-to-top").to_uppercase()).size(typography::BODY_SM);
    let arrow = icons::sized(icons::arrow_up(), sizing::ICON_SM)
        .style(styles::svg::tinted(palette::STONE_300, palette::WHITE));

    let back_to_top = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(label)
            .push(arrow),
    )
    .on_press(Message::BackToTop)
    .padding(0)
    .style(styles::button::text_link(palette::STONE_300, palette::WHITE));

    let copyright = Text::new(ctx.i18n.tr("footer-copyright"))
        .size(typography::CAPTION)
        .color(palette::STONE_600);

    let column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Right)
        .push(back_to_top)
        .push(copyright);

    let inner = Container::new(column)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .align_x(Horizontal::Right);

    Container::new(inner)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(Padding {
            top: spacing::XXXL - spacing::MD,
            bottom: spacing::XXXL - spacing::MD,
            left: spacing::LG,
            right: spacing::LG,
        })
        .style(styles::container::footer)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_to_top_requests_scroll() {
        assert_eq!(update(Message::BackToTop), Event::ScrollToTop);
    }

    #[test]
    fn footer_view_renders() {
        let i18n = I18n::default();
        let _ = view(ViewContext { i18n: &i18n });
    }
}
