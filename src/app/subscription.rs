// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::ANIMATION_FRAME;
use iced::{time, Subscription};

/// Creates the animation frame subscription.
///
/// Frames are only requested while something on the page is moving: a
/// reveal transition, a spinner or image fade, the lightbox backdrop, a
/// smooth scroll or the star field.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_FRAME).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
