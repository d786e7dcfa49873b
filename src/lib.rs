//! # Player OSD Library
//!
//! This library provides the on-screen-display overlay subsystem for the player.
//! It owns a background render thread that periodically formats the current
//! playback position as `H:MM:SS/H:MM:SS` and hands it to a text-rendering
//! collaborator, plus the clock and subtitle-text-codec seams that thread
//! depends on.

pub mod clock;
pub mod codec;
pub mod constants;
pub mod error;
pub mod overlay;
pub mod render;
mod tools;
