// SPDX-License-Identifier: MPL-2.0
//! Twinkling four-pointed stars drawn on a canvas behind the page.

use crate::ui::design_tokens::palette;
use crate::ui::state::scroll::ease_in_out;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use rand::Rng;

/// Star outline on a 24×24 grid, clockwise from the top point.
const STAR_OUTLINE: [(f32, f32); 8] = [
    (12.0, 0.0),
    (14.5, 9.5),
    (24.0, 12.0),
    (14.5, 14.5),
    (12.0, 24.0),
    (9.5, 14.5),
    (0.0, 12.0),
    (9.5, 9.5),
];
const OUTLINE_GRID: f32 = 24.0;

/// One star, placed relative to the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Top edge as a fraction of the window height.
    pub top: f32,
    /// Left edge as a fraction of the window width.
    pub left: f32,
    /// Edge length in logical pixels.
    pub size: f32,
    /// Seconds before the first twinkle.
    pub delay: f32,
    /// Seconds per twinkle cycle.
    pub duration: f32,
}

impl Star {
    /// Random star: whole-percent position, 8-19 px, 0-5 s delay, 3-6 s cycle.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            top: f32::from(rng.gen_range(0u8..100)) / 100.0,
            left: f32::from(rng.gen_range(0u8..100)) / 100.0,
            size: f32::from(rng.gen_range(8u8..20)),
            delay: rng.gen_range(0.0..5.0),
            duration: rng.gen_range(3.0..6.0),
        }
    }

    /// Opacity and scale at `elapsed` seconds since startup, or `None` while
    /// the star is still waiting for its delay.
    #[must_use]
    pub fn twinkle(&self, elapsed: f32) -> Option<(f32, f32)> {
        let since_start = elapsed - self.delay;
        if since_start < 0.0 || self.duration <= 0.0 {
            return None;
        }
        let phase = (since_start % self.duration) / self.duration;
        // 0% and 100% are dim, 50% is the peak.
        let rise = 1.0 - (2.0 * phase - 1.0).abs();
        let value = ease_in_out(rise);
        Some((value, 0.5 + 0.5 * value))
    }
}

/// Generates the star field once at startup.
pub fn generate(rng: &mut impl Rng, count: usize) -> Vec<Star> {
    (0..count).map(|_| Star::random(rng)).collect()
}

/// Canvas program drawing a star field at a point in time.
#[derive(Debug)]
pub struct StarField<'a> {
    stars: &'a [Star],
    elapsed: f32,
    color: Color,
}

impl<'a> StarField<'a> {
    #[must_use]
    pub fn new(stars: &'a [Star], elapsed: f32) -> Self {
        Self {
            stars,
            elapsed,
            color: palette::ROSE,
        }
    }

    /// Creates a full-size Canvas widget from this star field.
    pub fn into_element<Message: 'a>(self) -> iced::Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for StarField<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for star in self.stars {
            let Some((alpha, scale)) = star.twinkle(self.elapsed) else {
                continue;
            };
            let half = star.size / 2.0;
            let center = Point::new(
                star.left * bounds.width + half,
                star.top * bounds.height + half,
            );
            let unit = star.size * scale / OUTLINE_GRID;

            let path = Path::new(|builder| {
                for (i, (x, y)) in STAR_OUTLINE.iter().enumerate() {
                    let point = Point::new(
                        center.x + (x - OUTLINE_GRID / 2.0) * unit,
                        center.y + (y - OUTLINE_GRID / 2.0) * unit,
                    );
                    if i == 0 {
                        builder.move_to(point);
                    } else {
                        builder.line_to(point);
                    }
                }
                builder.close();
            });

            frame.fill(&path, Color { a: alpha, ..self.color });
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn star() -> Star {
        Star {
            top: 0.1,
            left: 0.2,
            size: 12.0,
            delay: 1.0,
            duration: 4.0,
        }
    }

    #[test]
    fn generated_stars_respect_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let stars = generate(&mut rng, 24);
        assert_eq!(stars.len(), 24);
        for star in stars {
            assert!((0.0..1.0).contains(&star.top));
            assert!((0.0..1.0).contains(&star.left));
            assert!((8.0..20.0).contains(&star.size));
            assert!((0.0..5.0).contains(&star.delay));
            assert!((3.0..6.0).contains(&star.duration));
        }
    }

    #[test]
    fn star_is_hidden_before_delay() {
        assert!(star().twinkle(0.5).is_none());
    }

    #[test]
    fn star_peaks_mid_cycle() {
        let (alpha, scale) = star().twinkle(1.0 + 2.0).expect("visible");
        assert_abs_diff_eq!(alpha, 1.0);
        assert_abs_diff_eq!(scale, 1.0);
    }

    #[test]
    fn star_is_dim_at_cycle_edges() {
        let (alpha, scale) = star().twinkle(1.0).expect("visible");
        assert_abs_diff_eq!(alpha, 0.0);
        assert_abs_diff_eq!(scale, 0.5);

        let (alpha, _) = star().twinkle(1.0 + 4.0 * 3.0).expect("visible");
        assert_abs_diff_eq!(alpha, 0.0, epsilon = 1e-4);
    }
}
