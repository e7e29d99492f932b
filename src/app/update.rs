// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component messages are turned into state changes here, and component
//! effects into tasks: image downloads and scroll operations.

use super::{Message, SectionId};
use crate::config::{ScrollBehavior, MAX_IMAGE_BYTES};
use crate::error::Error;
use crate::gallery::{self, ItemId, PROJECTS};
use crate::media::{self, ImageCache, ImageData};
use crate::ui::footer::{self, Event as FooterEvent};
use crate::ui::gallery_grid;
use crate::ui::lightbox::{self, Event as LightboxEvent};
use crate::ui::state::image_load::{self, Ticket};
use crate::ui::state::{scroll, selection, visibility};
use crate::ui::state::{ImageSlot, PageScroll, Selection, VisibilityTracker};
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::widget::{operation, Id};
use iced::Task;
use std::collections::HashMap;
use std::time::Instant;

/// Id of the scrollable holding the whole page.
pub const PAGE_SCROLL_ID: &str = "render-folio-page";

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub scroll_behavior: ScrollBehavior,
    pub sections: &'a mut HashMap<SectionId, VisibilityTracker>,
    pub tiles: &'a mut HashMap<ItemId, ImageSlot>,
    pub lightbox_image: &'a mut ImageSlot,
    pub selection: &'a mut Selection,
    pub scroll: &'a mut PageScroll,
    pub hovered_tile: &'a mut Option<ItemId>,
    pub cache: &'a mut ImageCache,
    pub client: Option<&'a reqwest::Client>,
    pub now: &'a mut Instant,
}

/// Which image slot a download belongs to.
#[derive(Debug, Clone, Copy)]
enum Target {
    Tile(ItemId),
    Lightbox,
}

impl Target {
    fn loaded(self, ticket: Ticket, result: Result<ImageData, Error>) -> Message {
        match self {
            Target::Tile(id) => Message::TileImageLoaded { id, ticket, result },
            Target::Lightbox => Message::LightboxImageLoaded { ticket, result },
        }
    }
}

impl UpdateContext<'_> {
    fn slot_mut(&mut self, target: Target) -> &mut ImageSlot {
        match target {
            Target::Tile(id) => self.tiles.entry(id).or_default(),
            Target::Lightbox => &mut *self.lightbox_image,
        }
    }

    /// Points a slot at `source` and starts the download if needed. A cached
    /// image completes the slot right away.
    fn request_image(&mut self, target: Target, source: &'static str) -> Task<Message> {
        let image_load::Effect::Fetch(ticket) =
            self.slot_mut(target).handle(image_load::Message::SetSource(source))
        else {
            return Task::none();
        };

        if let Some(image) = self.cache.get(source) {
            let at = *self.now;
            self.slot_mut(target).handle(image_load::Message::Completed {
                ticket,
                result: Ok(image),
                at,
            });
            return Task::none();
        }

        let Some(client) = self.client.cloned() else {
            return Task::done(target.loaded(
                ticket,
                Err(Error::Network("HTTP client unavailable".into())),
            ));
        };

        tracing::debug!(source, "fetching image");
        Task::perform(
            media::fetch_image(client, source, MAX_IMAGE_BYTES),
            move |result| target.loaded(ticket, result),
        )
    }

    fn complete_image(
        &mut self,
        target: Target,
        ticket: Ticket,
        result: Result<ImageData, Error>,
    ) -> Task<Message> {
        if let Ok(image) = &result {
            if self.slot_mut(target).accepts(ticket) {
                self.cache.insert(ticket.source, image.clone());
                let stats = self.cache.stats();
                tracing::debug!(
                    images = stats.image_count,
                    bytes = self.cache.memory_usage(),
                    hit_rate = stats.hit_rate(),
                    evictions = stats.evictions,
                    "image cached"
                );
            }
        }
        let at = *self.now;
        self.slot_mut(target)
            .handle(image_load::Message::Completed { ticket, result, at });
        Task::none()
    }

    fn reveal(&mut self, section: SectionId) {
        let Some(tracker) = self.sections.get_mut(&section) else {
            return;
        };
        let effect = tracker.handle(visibility::Message::Intersected(*self.now));
        if effect == visibility::Effect::Revealed {
            tracing::debug!(?section, "section revealed");
        }
    }
}

/// Starts downloading every tile image in page order.
pub fn load_all_tiles(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let tasks: Vec<_> = PROJECTS
        .iter()
        .flat_map(|project| project.items.iter())
        .map(|item| ctx.request_image(Target::Tile(item.id), item.source_url))
        .collect();
    Task::batch(tasks)
}

/// Handles a first intersection of a text section.
pub fn handle_revealed(ctx: &mut UpdateContext<'_>, section: SectionId) -> Task<Message> {
    ctx.reveal(section);
    Task::none()
}

/// Handles gallery grid messages.
pub fn handle_grid_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery_grid::Message,
) -> Task<Message> {
    match message {
        gallery_grid::Message::Open(id) => {
            let Some(item) = gallery::find(id) else {
                tracing::warn!(item = %id, "click on unknown gallery item");
                return Task::none();
            };
            let at = *ctx.now;
            match ctx
                .selection
                .handle(selection::Message::Select { item: *item, at })
            {
                selection::Effect::Changed(item) => {
                    ctx.request_image(Target::Lightbox, item.source_url)
                }
                selection::Effect::None | selection::Effect::Closed => Task::none(),
            }
        }
        gallery_grid::Message::Hover(id, true) => {
            *ctx.hovered_tile = Some(id);
            Task::none()
        }
        gallery_grid::Message::Hover(id, false) => {
            if *ctx.hovered_tile == Some(id) {
                *ctx.hovered_tile = None;
            }
            Task::none()
        }
        gallery_grid::Message::Revealed(id) => {
            ctx.reveal(SectionId::Tile(id));
            Task::none()
        }
    }
}

/// Handles lightbox messages.
pub fn handle_lightbox_message(
    ctx: &mut UpdateContext<'_>,
    message: lightbox::Message,
) -> Task<Message> {
    match lightbox::update(message) {
        LightboxEvent::Dismiss => {
            ctx.selection.handle(selection::Message::Dismiss);
            Task::none()
        }
    }
}

/// Handles footer messages.
pub fn handle_footer_message(
    ctx: &mut UpdateContext<'_>,
    message: footer::Message,
) -> Task<Message> {
    match footer::update(message) {
        FooterEvent::ScrollToTop => {
            let effect = ctx.scroll.handle(scroll::Message::ScrollToTop {
                behavior: ctx.scroll_behavior,
                at: *ctx.now,
            });
            scroll_task(effect)
        }
    }
}

/// Handles a new page scroll offset.
pub fn handle_page_scrolled(ctx: &mut UpdateContext<'_>, offset_y: f32) -> Task<Message> {
    let effect = ctx.scroll.handle(scroll::Message::Scrolled(offset_y));
    scroll_task(effect)
}

/// Handles a finished tile download.
pub fn handle_tile_image_loaded(
    ctx: &mut UpdateContext<'_>,
    id: ItemId,
    ticket: Ticket,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    ctx.complete_image(Target::Tile(id), ticket, result)
}

/// Handles a finished lightbox download.
pub fn handle_lightbox_image_loaded(
    ctx: &mut UpdateContext<'_>,
    ticket: Ticket,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    ctx.complete_image(Target::Lightbox, ticket, result)
}

/// Advances the animation clock.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    *ctx.now = now;
    for slot in ctx.tiles.values_mut() {
        slot.handle(image_load::Message::SpinnerTick);
    }
    ctx.lightbox_image.handle(image_load::Message::SpinnerTick);

    let effect = ctx.scroll.handle(scroll::Message::Tick(now));
    scroll_task(effect)
}

/// Turns a scroll effect into a scrollable operation on the page.
fn scroll_task(effect: scroll::Effect) -> Task<Message> {
    match effect {
        scroll::Effect::None => Task::none(),
        scroll::Effect::SnapToTop => {
            operation::snap_to(Id::new(PAGE_SCROLL_ID), RelativeOffset { x: 0.0, y: 0.0 })
        }
        scroll::Effect::ScrollTo(y) => {
            operation::scroll_to(Id::new(PAGE_SCROLL_ID), AbsoluteOffset { x: 0.0, y })
        }
    }
}
