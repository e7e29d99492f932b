// SPDX-License-Identifier: MPL-2.0
//! Renders one image slot: spinner while loading, the image fading in once
//! decoded, or an "image off" placeholder when the load failed.

use crate::ui::design_tokens::{palette, sizing};
use crate::ui::icons;
use crate::ui::state::image_load::Display;
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{image, Container, Image};
use iced::{Color, ContentFit, Element, Length};

/// Opacity of the "image off" icon.
const FAILED_ICON_OPACITY: f32 = 0.5;

/// Contextual data needed to render an image slot.
pub struct ViewContext<'a> {
    pub display: Display<'a>,
    /// `Cover` for grid tiles, `Contain` for the lightbox.
    pub fit: ContentFit,
    /// Extra opacity factor applied on top of the image's own fade (used by
    /// the reveal transition).
    pub alpha: f32,
    /// Placeholder surface behind a loading image; `None` keeps it transparent.
    pub surface: Option<Color>,
}

/// Render an image slot.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    match ctx.display {
        Display::Empty | Display::Loading { .. } => {
            let rotation = match ctx.display {
                Display::Loading { spinner_rotation } => spinner_rotation,
                _ => 0.0,
            };
            let spinner = AnimatedSpinner::new(rotation)
                .with_alpha(ctx.alpha)
                .into_element();
            let container = Container::new(spinner).center(Length::Fill);
            match ctx.surface {
                Some(color) => container
                    .style(styles::container::fill(Color {
                        a: color.a * ctx.alpha,
                        ..color
                    }))
                    .into(),
                None => container.into(),
            }
        }
        Display::Loaded { image, opacity } => Image::<image::Handle>::new(image.handle.clone())
            .content_fit(ctx.fit)
            .opacity(opacity * ctx.alpha)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Display::Failed => {
            let icon = icons::sized(icons::image_off(), sizing::ICON_LG).style(
                styles::svg::faded(palette::WINE, FAILED_ICON_OPACITY * ctx.alpha),
            );
            Container::new(icon)
                .center(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::fill(Color {
                    a: ctx.alpha,
                    ..palette::STONE_200
                }))
                .into()
        }
    }
}

/// Minimum height a slot needs for its current display.
#[must_use]
pub fn min_height(display: &Display<'_>) -> f32 {
    match display {
        Display::Failed => sizing::PLACEHOLDER_MIN_HEIGHT,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageData;

    #[test]
    fn failed_slot_reserves_placeholder_height() {
        assert_eq!(min_height(&Display::Failed), sizing::PLACEHOLDER_MIN_HEIGHT);
        assert_eq!(min_height(&Display::Empty), 0.0);
    }

    #[test]
    fn every_display_renders() {
        let data = ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]);
        let displays = [
            Display::Empty,
            Display::Loading {
                spinner_rotation: 1.0,
            },
            Display::Loaded {
                image: &data,
                opacity: 0.5,
            },
            Display::Failed,
        ];
        for display in displays {
            let _: Element<'_, ()> = view(ViewContext {
                display,
                fit: ContentFit::Cover,
                alpha: 1.0,
                surface: Some(palette::STONE_100),
            });
        }
    }
}
