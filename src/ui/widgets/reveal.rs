// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that reports the first time its content enters the
//! viewport, and draws the content shifted down while it slides in.
//!
//! The widget itself is stateless apart from a "reported" latch that keeps it
//! from publishing the same message twice before the application rebuilds the
//! view. Whether a section still needs observing is decided by the
//! application's [`VisibilityTracker`](crate::ui::state::VisibilityTracker):
//! it only attaches `on_reveal` while the tracker is hidden. Removing the
//! widget from the tree ends observation.

use crate::ui::state::visibility::{intersects, RootMargin};
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size, Vector};

#[derive(Debug, Default)]
struct State {
    reported: bool,
}

/// Whether the widget should publish its reveal message for this event.
fn should_report(
    reported: bool,
    observing: bool,
    bounds: Rectangle,
    viewport: Rectangle,
    margin: RootMargin,
) -> bool {
    observing && !reported && intersects(bounds, viewport, margin)
}

/// Wraps content with one-shot viewport intersection reporting.
pub struct Reveal<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_reveal: Option<Message>,
    margin: RootMargin,
    offset_y: f32,
}

impl<'a, Message, Theme, Renderer> Reveal<'a, Message, Theme, Renderer> {
    /// Creates a new `Reveal` wrapping the given content.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            on_reveal: None,
            margin: RootMargin::default(),
            offset_y: 0.0,
        }
    }

    /// Message published once when the content first intersects the viewport.
    #[must_use]
    pub fn on_reveal(mut self, message: Message) -> Self {
        self.on_reveal = Some(message);
        self
    }

    /// Replaces the reveal message. `None` turns reporting off.
    #[must_use]
    pub fn on_reveal_maybe(mut self, message: Option<Message>) -> Self {
        self.on_reveal = message;
        self
    }

    /// Margin applied to the viewport before the intersection test.
    #[must_use]
    pub fn margin(mut self, margin: RootMargin) -> Self {
        self.margin = margin;
        self
    }

    /// Vertical draw offset of the content, in logical pixels.
    #[must_use]
    pub fn offset_y(mut self, offset_y: f32) -> Self {
        self.offset_y = offset_y;
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Reveal<'_, Message, Theme, Renderer>
where
    Message: Clone,
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let translation = Vector::new(0.0, self.offset_y);
        renderer.with_translation(translation, |renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                layout,
                cursor,
                viewport,
            );
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        if should_report(
            state.reported,
            self.on_reveal.is_some(),
            layout.bounds(),
            *viewport,
            self.margin,
        ) {
            if let Some(message) = &self.on_reveal {
                state.reported = true;
                shell.publish(message.clone());
            }
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Reveal<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(reveal: Reveal<'a, Message, Theme, Renderer>) -> Self {
        Self::new(reveal)
    }
}

/// Helper function to create a reveal wrapper.
pub fn reveal<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> Reveal<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    Reveal::new(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rectangle = Rectangle {
        x: 0.0,
        y: 0.0,
        width: 800.0,
        height: 600.0,
    };

    const ON_SCREEN: Rectangle = Rectangle {
        x: 0.0,
        y: 100.0,
        width: 800.0,
        height: 200.0,
    };

    const BELOW_FOLD: Rectangle = Rectangle {
        x: 0.0,
        y: 900.0,
        width: 800.0,
        height: 200.0,
    };

    #[test]
    fn first_intersection_is_reported() {
        assert!(should_report(
            false,
            true,
            ON_SCREEN,
            VIEWPORT,
            RootMargin::Pixels(-50.0)
        ));
    }

    #[test]
    fn second_intersection_is_not_reported() {
        assert!(!should_report(
            true,
            true,
            ON_SCREEN,
            VIEWPORT,
            RootMargin::Pixels(-50.0)
        ));
    }

    #[test]
    fn without_reveal_message_nothing_is_reported() {
        assert!(!should_report(
            false,
            false,
            ON_SCREEN,
            VIEWPORT,
            RootMargin::default()
        ));
    }

    #[test]
    fn content_below_the_fold_waits() {
        assert!(!should_report(
            false,
            true,
            BELOW_FOLD,
            VIEWPORT,
            RootMargin::default()
        ));
    }
}
