// SPDX-License-Identifier: MPL-2.0
//! Lightbox selection state.
//!
//! At most one item is selected at a time. Selecting replaces the current
//! item, dismissing is idempotent.

use crate::config::LIGHTBOX_FADE;
use crate::gallery::GalleryItem;
use crate::ui::state::visibility::ratio;
use std::time::Instant;

/// The item currently shown in the lightbox, if any.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    current: Option<GalleryItem>,
    opened_at: Option<Instant>,
}

/// Messages for the selection state.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Select { item: GalleryItem, at: Instant },
    Dismiss,
}

/// Effects produced by a selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A different item is now shown and its image must be loaded.
    Changed(GalleryItem),
    /// The lightbox closed.
    Closed,
}

impl Selection {
    /// Handle a selection message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Select { item, at } => {
                if self.current == Some(item) {
                    return Effect::None;
                }
                // Keep the backdrop steady when swapping between items.
                if self.current.is_none() {
                    self.opened_at = Some(at);
                }
                self.current = Some(item);
                tracing::debug!(item = %item.id, "lightbox item selected");
                Effect::Changed(item)
            }
            Message::Dismiss => {
                if self.current.take().is_none() {
                    return Effect::None;
                }
                self.opened_at = None;
                tracing::debug!("lightbox dismissed");
                Effect::Closed
            }
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&GalleryItem> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Backdrop opacity factor in `0.0..=1.0` for the open animation.
    #[must_use]
    pub fn backdrop_progress(&self, now: Instant) -> f32 {
        match self.opened_at {
            Some(opened) => ratio(now.saturating_duration_since(opened), LIGHTBOX_FADE),
            None => 0.0,
        }
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.is_open() && self.backdrop_progress(now) < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{find, ItemId};

    fn item(id: u32) -> GalleryItem {
        *find(ItemId(id)).expect("item exists")
    }

    #[test]
    fn select_opens_lightbox() {
        let mut selection = Selection::default();
        let effect = selection.handle(Message::Select {
            item: item(13),
            at: Instant::now(),
        });

        assert_eq!(effect, Effect::Changed(item(13)));
        assert!(selection.is_open());
        assert_eq!(selection.current().map(|i| i.id), Some(ItemId(13)));
    }

    #[test]
    fn last_selection_wins() {
        let mut selection = Selection::default();
        let now = Instant::now();
        selection.handle(Message::Select { item: item(1), at: now });
        selection.handle(Message::Select { item: item(2), at: now });

        assert_eq!(selection.current().map(|i| i.id), Some(ItemId(2)));
    }

    #[test]
    fn reselecting_same_item_is_noop() {
        let mut selection = Selection::default();
        let now = Instant::now();
        selection.handle(Message::Select { item: item(5), at: now });
        let effect = selection.handle(Message::Select { item: item(5), at: now });
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn dismiss_clears_selection() {
        let mut selection = Selection::default();
        selection.handle(Message::Select {
            item: item(4),
            at: Instant::now(),
        });

        assert_eq!(selection.handle(Message::Dismiss), Effect::Closed);
        assert!(!selection.is_open());
        assert_eq!(selection.backdrop_progress(Instant::now()), 0.0);
    }

    #[test]
    fn dismiss_without_selection_is_idempotent() {
        let mut selection = Selection::default();
        assert_eq!(selection.handle(Message::Dismiss), Effect::None);
        assert_eq!(selection.handle(Message::Dismiss), Effect::None);
        assert!(selection.current().is_none());
    }

    #[test]
    fn backdrop_fades_in_once() {
        let mut selection = Selection::default();
        let opened = Instant::now();
        selection.handle(Message::Select { item: item(1), at: opened });

        assert!(selection.is_animating(opened));
        assert_eq!(selection.backdrop_progress(opened + LIGHTBOX_FADE), 1.0);

        // Swapping items keeps the original open instant.
        selection.handle(Message::Select {
            item: item(2),
            at: opened + LIGHTBOX_FADE,
        });
        assert!(!selection.is_animating(opened + LIGHTBOX_FADE));
    }
}
