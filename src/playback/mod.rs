//! Keyboard-driven slide show playback.
//!
//! Playback walks a presentation snapshot one slide at a time. A step starts a
//! short transition; the new slide is committed only when the transition has
//! run its full length, and Next/Prev presses arriving in between are dropped.

mod controller;
mod keys;

pub use controller::{Playback, PlaybackEvent, PlaybackState};
pub use keys::{Key, PlaybackCommand};
