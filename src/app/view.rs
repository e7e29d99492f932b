// SPDX-License-Identifier: MPL-2.0
//! View composition for the application.
//!
//! The page is a stack of layers: the star field at the back, the scrolling
//! page content, the navbar pinned on top, and the lightbox over everything
//! while an item is selected.

use super::update::PAGE_SCROLL_ID;
use super::{Message, SectionId};
use crate::gallery::{GalleryItem, ItemId, Project, PROJECTS};
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::footer::{self, ViewContext as FooterViewContext};
use crate::ui::gallery_grid::{self, Tile, ViewContext as GridViewContext};
use crate::ui::lightbox::{self, ViewContext as LightboxViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::prose;
use crate::ui::state::image_load::Display;
use crate::ui::state::visibility::Appearance;
use crate::ui::state::{ImageSlot, RootMargin, Selection, VisibilityTracker};
use crate::ui::styles;
use crate::ui::widgets::starfield::{Star, StarField};
use iced::widget::scrollable::Viewport;
use iced::widget::{Column, Container, Id, Scrollable, Stack};
use iced::{alignment::Horizontal, Element, Length, Padding};
use std::collections::HashMap;
use std::time::Instant;

/// Appearance of a section that has no tracker.
const SHOWN: Appearance = Appearance {
    opacity: 1.0,
    offset_y: 0.0,
};

/// Contextual data needed to render the application.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub margin: RootMargin,
    pub sections: &'a HashMap<SectionId, VisibilityTracker>,
    pub tiles: &'a HashMap<ItemId, ImageSlot>,
    pub lightbox_image: &'a ImageSlot,
    pub selection: &'a Selection,
    pub scrolled: bool,
    pub hovered_tile: Option<ItemId>,
    pub stars: &'a [Star],
    /// Seconds since startup, drives the star twinkle.
    pub elapsed: f32,
    pub now: Instant,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut page = Column::new()
        .width(Length::Fill)
        .push(prose::hero(ctx.i18n, reveal_context(&ctx, SectionId::Hero)));

    for project in &PROJECTS {
        page = page
            .push(prose::project_intro(
                ctx.i18n,
                project,
                reveal_context(&ctx, SectionId::ProjectIntro(project.id)),
            ))
            .push(view_grid(&ctx, project));
    }

    page = page.push(footer::view(FooterViewContext { i18n: ctx.i18n }).map(Message::Footer));

    let scrollable = Scrollable::new(page)
        .id(Id::new(PAGE_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::PageScrolled(viewport.absolute_offset().y));

    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);
    if !ctx.stars.is_empty() {
        layers = layers.push(StarField::new(ctx.stars, ctx.elapsed).into_element());
    }
    layers = layers.push(scrollable).push(navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        scrolled: ctx.scrolled,
    }));

    if ctx.selection.is_open() {
        let lightbox_view = lightbox::view(LightboxViewContext {
            i18n: ctx.i18n,
            display: ctx.lightbox_image.display(ctx.now),
            backdrop_progress: ctx.selection.backdrop_progress(ctx.now),
        })
        .map(Message::Lightbox);
        layers = layers.push(lightbox_view);
    }

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}

pub(super) fn reveal_context(
    ctx: &ViewContext<'_>,
    section: SectionId,
) -> prose::RevealContext<Message> {
    let tracker = ctx.sections.get(&section);
    prose::RevealContext {
        appearance: tracker.map_or(SHOWN, |tracker| tracker.appearance(ctx.now)),
        margin: ctx.margin,
        on_reveal: tracker
            .is_some_and(VisibilityTracker::is_observing)
            .then_some(Message::Revealed(section)),
    }
}

/// Builds the grid entry for one item from its slot and tracker.
pub(super) fn tile<'a>(ctx: &ViewContext<'a>, item: &'static GalleryItem) -> Tile<'a> {
    let slot = ctx.tiles.get(&item.id);
    let tracker = ctx.sections.get(&SectionId::Tile(item.id));
    Tile {
        item,
        display: slot.map_or(Display::Empty, |slot| slot.display(ctx.now)),
        aspect: slot
            .and_then(ImageSlot::image)
            .and_then(ImageData::aspect)
            .unwrap_or_else(|| item.estimated_aspect()),
        appearance: tracker.map_or(SHOWN, |tracker| tracker.appearance(ctx.now)),
        observing: tracker.is_some_and(VisibilityTracker::is_observing),
        hovered: ctx.hovered_tile == Some(item.id),
    }
}

fn view_grid<'a>(ctx: &ViewContext<'a>, project: &'static Project) -> Element<'a, Message> {
    let tiles = project.items.iter().map(|item| tile(ctx, item)).collect();

    let grid = gallery_grid::view(GridViewContext {
        tiles,
        margin: ctx.margin,
    })
    .map(Message::Grid);

    let section = Container::new(grid)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding(Padding {
            top: 0.0,
            bottom: spacing::XXXL,
            left: spacing::LG,
            right: spacing::LG,
        });

    Container::new(section)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
