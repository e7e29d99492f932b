// SPDX-License-Identifier: MPL-2.0
//! Load state of one displayed image.
//!
//! Every source change bumps a generation counter. Completions carry the
//! [`Ticket`] they were issued with, so results for an older source or an
//! older generation are dropped, as is any second completion for the same
//! generation.

use crate::config::IMAGE_FADE;
use crate::error::Error;
use crate::media::ImageData;
use crate::ui::state::visibility::ratio;
use std::time::Instant;

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Identifies one fetch request issued by a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub source: &'static str,
    pub generation: u64,
}

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Loading,
    Loaded { image: ImageData, at: Instant },
    Failed,
}

/// Load state of a single image slot.
#[derive(Debug, Clone)]
pub struct ImageSlot {
    source: Option<&'static str>,
    generation: u64,
    phase: Phase,
    spinner_rotation: f32,
}

impl Default for ImageSlot {
    fn default() -> Self {
        Self {
            source: None,
            generation: 0,
            phase: Phase::Idle,
            spinner_rotation: 0.0,
        }
    }
}

/// Messages for an image slot.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show a (possibly different) source.
    SetSource(&'static str),
    /// A fetch finished.
    Completed {
        ticket: Ticket,
        result: Result<ImageData, Error>,
        at: Instant,
    },
    /// Animate the spinner.
    SpinnerTick,
}

/// Effects produced by an image slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The slot needs the pixels for this ticket.
    Fetch(Ticket),
}

/// What the view should draw for a slot.
#[derive(Debug, Clone, Copy)]
pub enum Display<'a> {
    Empty,
    Loading { spinner_rotation: f32 },
    Loaded { image: &'a ImageData, opacity: f32 },
    Failed,
}

impl ImageSlot {
    /// Handle an image slot message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::SetSource(source) => {
                if self.source == Some(source) && !matches!(self.phase, Phase::Idle) {
                    return Effect::None;
                }
                self.source = Some(source);
                self.generation += 1;
                self.phase = Phase::Loading;
                self.spinner_rotation = 0.0;
                Effect::Fetch(Ticket {
                    source,
                    generation: self.generation,
                })
            }
            Message::Completed { ticket, result, at } => {
                if !self.accepts(ticket) {
                    tracing::trace!(source = ticket.source, "dropping stale image completion");
                    return Effect::None;
                }
                self.phase = match result {
                    Ok(image) => Phase::Loaded { image, at },
                    Err(err) => {
                        tracing::warn!(source = ticket.source, %err, "image failed to load");
                        Phase::Failed
                    }
                };
                Effect::None
            }
            Message::SpinnerTick => {
                if self.is_loading() {
                    self.spinner_rotation += SPINNER_SPEED;
                    if self.spinner_rotation > std::f32::consts::TAU {
                        self.spinner_rotation -= std::f32::consts::TAU;
                    }
                }
                Effect::None
            }
        }
    }

    /// Whether a completion for `ticket` would be applied.
    #[must_use]
    pub fn accepts(&self, ticket: Ticket) -> bool {
        matches!(self.phase, Phase::Loading)
            && self.source == Some(ticket.source)
            && self.generation == ticket.generation
    }

    #[must_use]
    pub fn source(&self) -> Option<&'static str> {
        self.source
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self.phase, Phase::Failed)
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        match &self.phase {
            Phase::Loaded { image, .. } => Some(image),
            _ => None,
        }
    }

    /// Whether the spinner or the fade-in still needs frames.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        match &self.phase {
            Phase::Loading => true,
            Phase::Loaded { at, .. } => fade(*at, now) < 1.0,
            Phase::Idle | Phase::Failed => false,
        }
    }

    /// Snapshot for rendering at `now`.
    #[must_use]
    pub fn display(&self, now: Instant) -> Display<'_> {
        match &self.phase {
            Phase::Idle => Display::Empty,
            Phase::Loading => Display::Loading {
                spinner_rotation: self.spinner_rotation,
            },
            Phase::Loaded { image, at } => Display::Loaded {
                image,
                opacity: fade(*at, now),
            },
            Phase::Failed => Display::Failed,
        }
    }
}

fn fade(loaded_at: Instant, now: Instant) -> f32 {
    ratio(now.saturating_duration_since(loaded_at), IMAGE_FADE)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRC_A: &str = "https://i.ibb.co/fzPqtvSg/S1.png";
    const SRC_B: &str = "https://i.ibb.co/yFT7Sm2B/S2.png";

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![255, 255, 255, 255])
    }

    fn start(slot: &mut ImageSlot, source: &'static str) -> Ticket {
        match slot.handle(Message::SetSource(source)) {
            Effect::Fetch(ticket) => ticket,
            Effect::None => panic!("expected a fetch"),
        }
    }

    #[test]
    fn new_source_starts_loading() {
        let mut slot = ImageSlot::default();
        let ticket = start(&mut slot, SRC_A);

        assert!(slot.is_loading());
        assert_eq!(ticket.source, SRC_A);
        assert_eq!(ticket.generation, 1);
        assert!(matches!(slot.display(Instant::now()), Display::Loading { .. }));
    }

    #[test]
    fn completion_loads_image() {
        let mut slot = ImageSlot::default();
        let ticket = start(&mut slot, SRC_A);
        slot.handle(Message::Completed {
            ticket,
            result: Ok(pixel()),
            at: Instant::now(),
        });

        assert!(!slot.is_loading());
        assert_eq!(slot.image().map(|image| image.width), Some(1));
    }

    #[test]
    fn failure_shows_placeholder() {
        let mut slot = ImageSlot::default();
        let ticket = start(&mut slot, SRC_A);
        slot.handle(Message::Completed {
            ticket,
            result: Err(Error::Network("HTTP status: 404".into())),
            at: Instant::now(),
        });

        assert!(slot.is_failed());
        assert!(matches!(slot.display(Instant::now()), Display::Failed));
        assert!(!slot.is_animating(Instant::now()));
    }

    #[test]
    fn source_change_resets_to_loading() {
        let mut slot = ImageSlot::default();
        let first = start(&mut slot, SRC_A);
        slot.handle(Message::Completed {
            ticket: first,
            result: Err(Error::Decode("bad".into())),
            at: Instant::now(),
        });

        let second = start(&mut slot, SRC_B);
        assert!(slot.is_loading());
        assert_eq!(second.generation, first.generation + 1);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut slot = ImageSlot::default();
        let old = start(&mut slot, SRC_A);
        let _current = start(&mut slot, SRC_B);

        slot.handle(Message::Completed {
            ticket: old,
            result: Ok(pixel()),
            at: Instant::now(),
        });

        assert!(slot.is_loading());
        assert!(slot.image().is_none());
    }

    #[test]
    fn first_completion_wins() {
        let mut slot = ImageSlot::default();
        let ticket = start(&mut slot, SRC_A);
        let now = Instant::now();
        slot.handle(Message::Completed {
            ticket,
            result: Ok(pixel()),
            at: now,
        });
        slot.handle(Message::Completed {
            ticket,
            result: Err(Error::Network("late".into())),
            at: now,
        });

        assert!(slot.image().is_some());
        assert!(!slot.is_failed());
    }

    #[test]
    fn same_source_does_not_refetch() {
        let mut slot = ImageSlot::default();
        start(&mut slot, SRC_A);
        assert_eq!(slot.handle(Message::SetSource(SRC_A)), Effect::None);
        assert_eq!(slot.generation(), 1);
    }

    #[test]
    fn loaded_image_fades_in() {
        let mut slot = ImageSlot::default();
        let ticket = start(&mut slot, SRC_A);
        let loaded = Instant::now();
        slot.handle(Message::Completed {
            ticket,
            result: Ok(pixel()),
            at: loaded,
        });

        match slot.display(loaded) {
            Display::Loaded { opacity, .. } => assert_eq!(opacity, 0.0),
            other => panic!("unexpected display {other:?}"),
        }
        assert!(slot.is_animating(loaded));
        assert!(!slot.is_animating(loaded + IMAGE_FADE));
    }

    #[test]
    fn spinner_only_turns_while_loading() {
        let mut slot = ImageSlot::default();
        slot.handle(Message::SpinnerTick);
        assert!(matches!(slot.display(Instant::now()), Display::Empty));

        start(&mut slot, SRC_A);
        slot.handle(Message::SpinnerTick);
        match slot.display(Instant::now()) {
            Display::Loading { spinner_rotation } => assert!(spinner_rotation > 0.0),
            other => panic!("unexpected display {other:?}"),
        }
    }
}
