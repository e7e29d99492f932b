// SPDX-License-Identifier: MPL-2.0
//! Full-window viewer for the selected render.
//!
//! The image is scaled to fit without cropping, bounded to
//! [`sizing::LIGHTBOX_MAX_WIDTH`] and a fraction of the window height. The
//! only way out is the close control in the top-right corner.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::image_frame;
use crate::ui::state::image_load::Display;
use crate::ui::styles;
use iced::widget::{button, container, opaque, responsive, tooltip, Stack, Text};
use iced::{alignment, ContentFit, Element, Length, Padding};

/// Inset of the close control from the window corner.
const CLOSE_INSET: f32 = spacing::LG;

/// Padding between the window edge and the image area.
const FRAME_PADDING: f32 = spacing::XXL + spacing::MD;

/// The selected render is shown whole, never cropped.
pub const IMAGE_FIT: ContentFit = ContentFit::Contain;

/// Contextual data needed to render the lightbox.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub display: Display<'a>,
    /// Backdrop fade-in progress (0.0 - 1.0).
    pub backdrop_progress: f32,
}

/// Messages emitted by the lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Dismiss,
}

/// Process a lightbox message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Close => Event::Dismiss,
    }
}

/// Size of the box the image is fitted into for a given window size.
#[must_use]
pub fn image_bounds(window_width: f32, window_height: f32) -> (f32, f32) {
    let width = (window_width - 2.0 * FRAME_PADDING)
        .min(sizing::LIGHTBOX_MAX_WIDTH)
        .max(0.0);
    let height = (window_height - 2.0 * FRAME_PADDING)
        .min(window_height * sizing::LIGHTBOX_MAX_HEIGHT_RATIO)
        .max(0.0);
    (width, height)
}

/// Render the lightbox layer.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let display = ctx.display;
    let progress = ctx.backdrop_progress;

    let image_area = responsive(move |size| {
        let (width, height) = image_bounds(size.width, size.height);
        let frame = image_frame::view(image_frame::ViewContext {
            display,
            fit: IMAGE_FIT,
            alpha: progress,
            surface: None,
        });
        let framed = container(frame)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .style(styles::container::lifted);
        container(framed).center(Length::Fill).into()
    });

    let close_icon = icons::sized(icons::cross(), sizing::ICON_XL)
        .style(styles::svg::tinted(palette::WHITE, palette::STONE_300));
    let close_button = button(close_icon)
        .on_press(Message::Close)
        .padding(0)
        .style(styles::button::text_link(palette::WHITE, palette::STONE_300));
    let close = tooltip(
        close_button,
        Text::new(ctx.i18n.tr("lightbox-close")).size(typography::CAPTION),
        tooltip::Position::Left,
    );

    let close_layer = container(close)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(Padding::new(CLOSE_INSET));

    let layers = Stack::new()
        .push(image_area)
        .push(close_layer)
        .width(Length::Fill)
        .height(Length::Fill);

    opaque(
        container(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop(progress)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_dismisses() {
        assert_eq!(update(Message::Close), Event::Dismiss);
    }

    #[test]
    fn image_is_capped_at_max_width() {
        let (width, _) = image_bounds(3000.0, 1000.0);
        assert_eq!(width, sizing::LIGHTBOX_MAX_WIDTH);
    }

    #[test]
    fn image_height_is_bounded_by_window() {
        let (_, height) = image_bounds(1200.0, 800.0);
        assert!(height <= 800.0 * sizing::LIGHTBOX_MAX_HEIGHT_RATIO);
        assert!(height > 0.0);
    }

    #[test]
    fn tiny_window_never_goes_negative() {
        assert_eq!(image_bounds(10.0, 10.0), (0.0, 0.0));
    }
}
