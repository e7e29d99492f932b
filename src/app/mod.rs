// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the portfolio page.
//!
//! The `App` struct wires together the page sections, the lightbox, the
//! image downloads and localization. It translates component events into
//! side effects like fetch tasks or scroll operations.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, SectionId};

use crate::config::{self, Config, ScrollBehavior, REVEAL_STAGGER, STAR_COUNT};
use crate::gallery::{ItemId, PROJECTS};
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageCache};
use crate::ui::state::{
    ImageSlot, Observation, PageScroll, RootMargin, Selection, VisibilityTracker,
};
use crate::ui::widgets::starfield::{self, Star};
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// Whether sections start hidden and wait for an intersection.
    observation: Observation,
    margin: RootMargin,
    scroll_behavior: ScrollBehavior,
    sections: HashMap<SectionId, VisibilityTracker>,
    tiles: HashMap<ItemId, ImageSlot>,
    lightbox_image: ImageSlot,
    selection: Selection,
    scroll: PageScroll,
    hovered_tile: Option<ItemId>,
    cache: ImageCache,
    /// `None` when the HTTP client could not be built; every load then fails.
    client: Option<reqwest::Client>,
    stars: Vec<Star>,
    started: Instant,
    /// Clock used by the view; advanced by updates and animation frames.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("observation", &self.observation)
            .field("selected", &self.selection.current().map(|item| item.id))
            .field("scrolled", &self.scroll.is_scrolled())
            .field("cache", &self.cache)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be `Fn`; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (app, task) = Self::with_config(flags, &config);
        if let Some(key) = config_warning {
            tracing::warn!(key = %key, message = %app.i18n.tr(&key), "configuration warning");
        }
        (app, task)
    }

    /// Builds the initial state from an already loaded configuration and
    /// starts downloading every tile image.
    fn with_config(flags: Flags, config: &Config) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, config);
        let observation = if flags.no_animations || !config.display.reveal_animations {
            Observation::Unavailable
        } else {
            Observation::Available
        };

        let mut sections = HashMap::new();
        sections.insert(SectionId::Hero, VisibilityTracker::new(observation));
        for project in &PROJECTS {
            sections.insert(
                SectionId::ProjectIntro(project.id),
                VisibilityTracker::new(observation),
            );
            for (index, item) in project.items.iter().enumerate() {
                let delay = REVEAL_STAGGER * index as u32;
                sections.insert(
                    SectionId::Tile(item.id),
                    VisibilityTracker::new(observation).with_delay(delay),
                );
            }
        }

        let client = match media::build_client(config.network.timeout()) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::warn!(%err, "HTTP client unavailable, images will not load");
                None
            }
        };

        let stars = if config.display.ambient_stars {
            starfield::generate(&mut rand::thread_rng(), STAR_COUNT)
        } else {
            Vec::new()
        };

        let now = Instant::now();
        let mut app = App {
            i18n,
            observation,
            margin: config.display.root_margin(),
            scroll_behavior: config.display.scroll_behavior,
            sections,
            tiles: HashMap::new(),
            lightbox_image: ImageSlot::default(),
            selection: Selection::default(),
            scroll: PageScroll::default(),
            hovered_tile: None,
            cache: ImageCache::new(config.network.cache_bytes()),
            client,
            stars,
            started: now,
            now,
        };

        let task = update::load_all_tiles(&mut app.update_context());
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.needs_frames())
    }

    /// Whether any transition, spinner or twinkle is running.
    fn needs_frames(&self) -> bool {
        let now = self.now;
        !self.stars.is_empty()
            || self.scroll.is_animating()
            || self.selection.is_animating(now)
            || (self.selection.is_open() && self.lightbox_image.is_animating(now))
            || self.sections.values().any(|tracker| tracker.is_animating(now))
            || self.tiles.values().any(|slot| slot.is_animating(now))
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            scroll_behavior: self.scroll_behavior,
            sections: &mut self.sections,
            tiles: &mut self.tiles,
            lightbox_image: &mut self.lightbox_image,
            selection: &mut self.selection,
            scroll: &mut self.scroll,
            hovered_tile: &mut self.hovered_tile,
            cache: &mut self.cache,
            client: self.client.as_ref(),
            now: &mut self.now,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        if !matches!(message, Message::Tick(_)) {
            self.now = Instant::now();
        }
        let mut ctx = self.update_context();

        match message {
            Message::Revealed(section) => update::handle_revealed(&mut ctx, section),
            Message::Grid(grid_message) => update::handle_grid_message(&mut ctx, grid_message),
            Message::Lightbox(lightbox_message) => {
                update::handle_lightbox_message(&mut ctx, lightbox_message)
            }
            Message::Footer(footer_message) => {
                update::handle_footer_message(&mut ctx, footer_message)
            }
            Message::PageScrolled(offset_y) => update::handle_page_scrolled(&mut ctx, offset_y),
            Message::TileImageLoaded { id, ticket, result } => {
                update::handle_tile_image_loaded(&mut ctx, id, ticket, result)
            }
            Message::LightboxImageLoaded { ticket, result } => {
                update::handle_lightbox_image_loaded(&mut ctx, ticket, result)
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self.view_context())
    }

    fn view_context(&self) -> view::ViewContext<'_> {
        view::ViewContext {
            i18n: &self.i18n,
            margin: self.margin,
            sections: &self.sections,
            tiles: &self.tiles,
            lightbox_image: &self.lightbox_image,
            selection: &self.selection,
            scrolled: self.scroll.is_scrolled(),
            hovered_tile: self.hovered_tile,
            stars: &self.stars,
            elapsed: self.now.saturating_duration_since(self.started).as_secs_f32(),
            now: self.now,
        }
    }
}
