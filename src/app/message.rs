// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::{ItemId, ProjectId};
use crate::media::ImageData;
use crate::ui::footer;
use crate::ui::gallery_grid;
use crate::ui::lightbox;
use crate::ui::state::image_load::Ticket;
use std::time::Instant;

/// A page region with its own reveal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    ProjectIntro(ProjectId),
    Tile(ItemId),
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A text section reported its first intersection with the viewport.
    Revealed(SectionId),
    Grid(gallery_grid::Message),
    Lightbox(lightbox::Message),
    Footer(footer::Message),
    /// The page scrollable moved to this vertical offset.
    PageScrolled(f32),
    /// A tile image download finished.
    TileImageLoaded {
        id: ItemId,
        ticket: Ticket,
        result: Result<ImageData, Error>,
    },
    /// The lightbox image download finished.
    LightboxImageLoaded {
        ticket: Ticket,
        result: Result<ImageData, Error>,
    },
    /// Animation frame.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `RENDER_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Show every section immediately, without reveal transitions.
    pub no_animations: bool,
}
