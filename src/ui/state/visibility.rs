// SPDX-License-Identifier: MPL-2.0
//! One-shot visibility tracking for fade-in sections.
//!
//! A [`VisibilityTracker`] starts `Hidden` and latches `Visible` the first
//! time its section overlaps the (margined) viewport. The latch never
//! reverts. Once visible the tracker stops observing, so the
//! [`Reveal`](crate::ui::widgets::reveal::Reveal) widget no longer reports.
//!
//! The geometry helpers ([`RootMargin`], [`intersects`]) are shared with the
//! widget so the intersection rule lives in one place.

use crate::config::{REVEAL_DURATION, REVEAL_SLIDE_PX};
use iced::Rectangle;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Offset applied to each viewport edge before the intersection test.
///
/// Negative values shrink the viewport, positive values grow it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootMargin {
    /// Logical pixels.
    Pixels(f32),
    /// Percentage of the viewport dimension on the same axis.
    Percent(f32),
}

impl Default for RootMargin {
    fn default() -> Self {
        RootMargin::Pixels(0.0)
    }
}

impl RootMargin {
    /// Applies the margin to a viewport rectangle.
    ///
    /// A margin that would invert the rectangle collapses it to zero size
    /// around its center.
    #[must_use]
    pub fn apply(self, viewport: Rectangle) -> Rectangle {
        let (dx, dy) = match self {
            RootMargin::Pixels(px) => (px, px),
            RootMargin::Percent(pct) => (
                viewport.width * pct / 100.0,
                viewport.height * pct / 100.0,
            ),
        };

        let width = viewport.width + 2.0 * dx;
        let height = viewport.height + 2.0 * dy;

        let (x, width) = if width > 0.0 {
            (viewport.x - dx, width)
        } else {
            (viewport.x + viewport.width / 2.0, 0.0)
        };
        let (y, height) = if height > 0.0 {
            (viewport.y - dy, height)
        } else {
            (viewport.y + viewport.height / 2.0, 0.0)
        };

        Rectangle {
            x,
            y,
            width,
            height,
        }
    }

    /// Restricts the margin magnitude. Pixel margins use the given bounds,
    /// percentages are kept within ±100%.
    #[must_use]
    pub fn clamped(self, min_px: f32, max_px: f32) -> Self {
        match self {
            RootMargin::Pixels(px) => RootMargin::Pixels(px.clamp(min_px, max_px)),
            RootMargin::Percent(pct) => RootMargin::Percent(pct.clamp(-100.0, 100.0)),
        }
    }
}

/// Error returned when a margin string is not `<number>px` or `<number>%`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMarginError(String);

impl fmt::Display for ParseMarginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid root margin `{}`", self.0)
    }
}

impl std::error::Error for ParseMarginError {}

impl FromStr for RootMargin {
    type Err = ParseMarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseMarginError(s.to_string());

        let (number, unit_is_percent) = if let Some(number) = trimmed.strip_suffix("px") {
            (number, false)
        } else if let Some(number) = trimmed.strip_suffix('%') {
            (number, true)
        } else if trimmed == "0" {
            ("0", false)
        } else {
            return Err(err());
        };

        let value: f32 = number.trim().parse().map_err(|_| err())?;
        if !value.is_finite() {
            return Err(err());
        }

        Ok(if unit_is_percent {
            RootMargin::Percent(value)
        } else {
            RootMargin::Pixels(value)
        })
    }
}

/// Returns whether `region` overlaps `viewport` after applying `margin`.
///
/// Touching edges do not count. A zero-sized region never intersects, and
/// neither does a viewport the margin collapsed to zero size.
#[must_use]
pub fn intersects(region: Rectangle, viewport: Rectangle, margin: RootMargin) -> bool {
    let root = margin.apply(viewport);
    root.width > 0.0
        && root.height > 0.0
        && region.width > 0.0
        && region.height > 0.0
        && region.x < root.x + root.width
        && root.x < region.x + region.width
        && region.y < root.y + root.height
        && root.y < region.y + region.height
}

/// Whether the host can report intersections at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    Available,
    /// No observation facility; sections are shown immediately.
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Hidden,
    Visible { since: Option<Instant> },
}

/// Monotonic `Hidden → Visible` latch for one page section.
#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    phase: Phase,
    delay: Duration,
}

/// Messages for the visibility tracker.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// The observed region overlapped the viewport at the given instant.
    Intersected(Instant),
}

/// Effects produced by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The section just became visible; its transition starts now.
    Revealed,
}

impl VisibilityTracker {
    /// Creates a tracker. With [`Observation::Unavailable`] it starts visible
    /// with its transition already finished.
    #[must_use]
    pub fn new(observation: Observation) -> Self {
        let phase = match observation {
            Observation::Available => Phase::Hidden,
            Observation::Unavailable => Phase::Visible { since: None },
        };
        Self {
            phase,
            delay: Duration::ZERO,
        }
    }

    /// Sets the transition delay applied after the reveal.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Handle a tracker message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Intersected(at) => match self.phase {
                Phase::Hidden => {
                    self.phase = Phase::Visible { since: Some(at) };
                    Effect::Revealed
                }
                Phase::Visible { .. } => Effect::None,
            },
        }
    }

    /// The visibility flag.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, Phase::Visible { .. })
    }

    /// Whether intersections still need to be reported.
    #[must_use]
    pub fn is_observing(&self) -> bool {
        !self.is_visible()
    }

    /// Transition progress in `0.0..=1.0`, eased out.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Hidden => 0.0,
            Phase::Visible { since: None } => 1.0,
            Phase::Visible { since: Some(since) } => {
                let start = since + self.delay;
                let elapsed = now.saturating_duration_since(start);
                ease_out(ratio(elapsed, REVEAL_DURATION))
            }
        }
    }

    /// Whether the transition is still running at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.is_visible() && self.progress(now) < 1.0
    }

    /// Opacity and downward offset for rendering at `now`.
    #[must_use]
    pub fn appearance(&self, now: Instant) -> Appearance {
        let progress = self.progress(now);
        Appearance {
            opacity: progress,
            offset_y: REVEAL_SLIDE_PX * (1.0 - progress),
        }
    }
}

/// How a section should be drawn at a given moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub opacity: f32,
    pub offset_y: f32,
}

/// Elapsed fraction of `total`, clamped to `0.0..=1.0`.
#[must_use]
pub fn ratio(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

/// Cubic ease-out.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}
