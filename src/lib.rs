//! Minigames host library.
//!
//! Rules of the games live in the [`game`] crate. This crate drives them:
//! [`host`] turns key presses and frame time into snake ticks, [`shell`]
//! switches between the menu and the games, and [`autopilot`] plays the
//! snake game on its own.

#![allow(missing_docs)]

pub mod autopilot;
pub mod host;
pub mod shell;

pub use game::Result;
