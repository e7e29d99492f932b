// SPDX-License-Identifier: MPL-2.0
//! Page scroll position, navbar style toggle and "back to top" animation.

use crate::config::{ScrollBehavior, NAVBAR_SCROLL_THRESHOLD, SMOOTH_SCROLL_DURATION};
use crate::ui::state::visibility::ratio;
use std::time::Instant;

/// An in-flight smooth scroll towards the top of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    started: Instant,
}

impl SmoothScroll {
    /// Target offset at `now`.
    #[must_use]
    pub fn offset_at(&self, now: Instant) -> f32 {
        let t = ratio(now.saturating_duration_since(self.started), SMOOTH_SCROLL_DURATION);
        self.from * (1.0 - ease_in_out(t))
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= SMOOTH_SCROLL_DURATION
    }
}

/// Scroll state of the main page.
#[derive(Debug, Clone, Default)]
pub struct PageScroll {
    offset_y: f32,
    scrolled: bool,
    smooth: Option<SmoothScroll>,
}

/// Messages for the page scroll state.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// The scrollable reported a new vertical offset.
    Scrolled(f32),
    /// Return to the top of the page.
    ScrollToTop { behavior: ScrollBehavior, at: Instant },
    /// Animation frame.
    Tick(Instant),
}

/// Scroll operations requested by the state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// Jump straight to the top.
    SnapToTop,
    /// Move to this absolute vertical offset.
    ScrollTo(f32),
}

impl PageScroll {
    /// Handle a page scroll message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Scrolled(offset_y) => {
                self.offset_y = offset_y.max(0.0);
                let scrolled = self.offset_y > NAVBAR_SCROLL_THRESHOLD;
                if scrolled != self.scrolled {
                    tracing::trace!(scrolled, offset = self.offset_y, "navbar style changed");
                    self.scrolled = scrolled;
                }
                Effect::None
            }
            Message::ScrollToTop { behavior, at } => {
                if self.offset_y <= 0.0 {
                    self.smooth = None;
                    return Effect::None;
                }
                match behavior {
                    ScrollBehavior::Instant => {
                        self.smooth = None;
                        Effect::SnapToTop
                    }
                    ScrollBehavior::Smooth => {
                        self.smooth = Some(SmoothScroll {
                            from: self.offset_y,
                            started: at,
                        });
                        Effect::None
                    }
                }
            }
            Message::Tick(now) => match self.smooth {
                Some(smooth) if smooth.is_finished(now) => {
                    self.smooth = None;
                    Effect::SnapToTop
                }
                Some(smooth) => Effect::ScrollTo(smooth.offset_at(now)),
                None => Effect::None,
            },
        }
    }

    #[must_use]
    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    /// Whether the navbar uses its opaque, compact style.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.smooth.is_some()
    }
}

/// Cubic ease-in-out.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::time::Duration;

    #[test]
    fn offset_past_threshold_marks_scrolled() {
        let mut scroll = PageScroll::default();
        scroll.handle(Message::Scrolled(60.0));
        assert!(scroll.is_scrolled());

        scroll.handle(Message::Scrolled(0.0));
        assert!(!scroll.is_scrolled());
    }

    #[test]
    fn threshold_itself_is_not_scrolled() {
        let mut scroll = PageScroll::default();
        scroll.handle(Message::Scrolled(NAVBAR_SCROLL_THRESHOLD));
        assert!(!scroll.is_scrolled());
    }

    #[test]
    fn instant_scroll_snaps() {
        let mut scroll = PageScroll::default();
        scroll.handle(Message::Scrolled(900.0));
        let effect = scroll.handle(Message::ScrollToTop {
            behavior: ScrollBehavior::Instant,
            at: Instant::now(),
        });
        assert_eq!(effect, Effect::SnapToTop);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn smooth_scroll_steps_towards_top() {
        let mut scroll = PageScroll::default();
        scroll.handle(Message::Scrolled(1000.0));
        let start = Instant::now();
        scroll.handle(Message::ScrollToTop {
            behavior: ScrollBehavior::Smooth,
            at: start,
        });
        assert!(scroll.is_animating());

        let halfway = start + SMOOTH_SCROLL_DURATION / 2;
        match scroll.handle(Message::Tick(halfway)) {
            Effect::ScrollTo(offset) => assert_abs_diff_eq!(offset, 500.0, epsilon = 1.0),
            other => panic!("unexpected effect {other:?}"),
        }

        let done = start + SMOOTH_SCROLL_DURATION + Duration::from_millis(1);
        assert_eq!(scroll.handle(Message::Tick(done)), Effect::SnapToTop);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn scroll_to_top_at_top_does_nothing() {
        let mut scroll = PageScroll::default();
        let effect = scroll.handle(Message::ScrollToTop {
            behavior: ScrollBehavior::Smooth,
            at: Instant::now(),
        });
        assert_eq!(effect, Effect::None);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        assert_abs_diff_eq!(ease_in_out(0.0), 0.0);
        assert_abs_diff_eq!(ease_in_out(0.5), 0.5);
        assert_abs_diff_eq!(ease_in_out(1.0), 1.0);
        assert_abs_diff_eq!(ease_in_out(0.25) + ease_in_out(0.75), 1.0, epsilon = 1e-6);
    }
}
