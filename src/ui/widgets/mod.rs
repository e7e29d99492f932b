// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod reveal;
pub mod starfield;

pub use animated_spinner::AnimatedSpinner;
pub use reveal::{reveal, Reveal};
pub use starfield::StarField;
