// SPDX-License-Identifier: MPL-2.0
//! Text sections of the page: the hero paragraph and the project
//! descriptions. Both fade in with their own reveal.

use crate::gallery::Project;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::state::visibility::{Appearance, RootMargin};
use crate::ui::widgets::reveal;
use iced::widget::{Column, Container, Text};
use iced::{alignment::Horizontal, Color, Element, Length, Padding};

/// Reveal wiring shared by the text sections.
#[derive(Debug, Clone)]
pub struct RevealContext<Message> {
    pub appearance: Appearance,
    pub margin: RootMargin,
    /// Published once on first intersection; `None` when no longer observing.
    pub on_reveal: Option<Message>,
}

fn ink(alpha: f32) -> Color {
    Color {
        a: alpha,
        ..palette::WINE
    }
}

/// Hero paragraph under the navbar.
pub fn hero<'a, Message: Clone + 'a>(
    i18n: &'a I18n,
    reveal_ctx: RevealContext<Message>,
) -> Element<'a, Message> {
    let paragraph = Text::new(i18n.tr("hero-intro"))
        .size(typography::BODY_LG)
        .color(ink(reveal_ctx.appearance.opacity));

    let content = Container::new(paragraph)
        .max_width(sizing::HERO_MAX_WIDTH)
        .width(Length::Fill);

    let section = Container::new(
        reveal(content)
            .margin(reveal_ctx.margin)
            .offset_y(reveal_ctx.appearance.offset_y)
            .on_reveal_maybe(reveal_ctx.on_reveal),
    )
    .width(Length::Fill)
    .max_width(sizing::CONTENT_MAX_WIDTH)
    .padding(Padding {
        top: spacing::XXXL + spacing::XL,
        bottom: spacing::XXL + spacing::MD,
        left: spacing::LG,
        right: spacing::LG,
    });

    Container::new(section)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

/// Project title and description above its grid.
pub fn project_intro<'a, Message: Clone + 'a>(
    i18n: &'a I18n,
    project: &Project,
    reveal_ctx: RevealContext<Message>,
) -> Element<'a, Message> {
    let color = ink(reveal_ctx.appearance.opacity);

    let column = Column::new()
        .spacing(spacing::XL)
        .width(Length::Fill)
        .max_width(sizing::PROSE_MAX_WIDTH)
        .push(
            Text::new(i18n.tr(project.title_key))
                .size(typography::DISPLAY)
                .color(color),
        )
        .push(
            Text::new(i18n.tr(project.description_key))
                .size(typography::BODY)
                .color(color),
        );

    let block = Container::new(
        reveal(column)
            .margin(reveal_ctx.margin)
            .offset_y(reveal_ctx.appearance.offset_y)
            .on_reveal_maybe(reveal_ctx.on_reveal),
    )
    .padding(Padding {
        top: spacing::XXL,
        bottom: spacing::XXL,
        left: spacing::XS,
        right: spacing::XS,
    });

    Container::new(block)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::PROJECTS;

    fn hidden() -> RevealContext<()> {
        RevealContext {
            appearance: Appearance {
                opacity: 0.0,
                offset_y: 64.0,
            },
            margin: RootMargin::Pixels(-50.0),
            on_reveal: Some(()),
        }
    }

    #[test]
    fn sections_render() {
        let i18n = I18n::default();
        let _ = hero(&i18n, hidden());
        for project in &PROJECTS {
            let _ = project_intro(&i18n, project, hidden());
        }
    }

    #[test]
    fn ink_follows_reveal_opacity() {
        assert_eq!(ink(0.25).a, 0.25);
        assert_eq!(ink(1.0).r, palette::WINE.r);
    }
}
