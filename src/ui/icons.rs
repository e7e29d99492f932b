// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are SVG files embedded at compile time via `include_bytes!`, with
//! handles cached using `OnceLock`. Their stroke colors are baked into the
//! files, so each icon has a fixed color matching where it is used.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_lightbox`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(cross, "close.svg", "Cross icon: thin white X.");
define_icon!(
    arrow_up,
    "arrow_up.svg",
    "Arrow up icon: light stone arrow pointing up."
);
define_icon!(
    image_off,
    "image_off.svg",
    "Image off icon: wine picture frame crossed out."
);

/// Sets a square size on an icon.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
