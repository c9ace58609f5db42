//! Sidescroller host crate.
//!
//! Wires the simulation to a host: a level library read from disk, a
//! fixed-rate game-loop thread, and the session control calls a
//! frontend (or the headless CLI) uses to drive it.

pub mod control;
pub mod error;
pub mod game_loop;
pub mod library;
pub mod state;

pub use sidescroller_core as core;
