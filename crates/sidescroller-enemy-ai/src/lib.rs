//! Enemy AI for the side-scroller.
//!
//! Implements the per-enemy behavior state machine: platform patrol,
//! the fire-timer countdown and aiming, and stomp damage rules.

pub mod fsm;
pub mod profiles;

pub use sidescroller_core as core;
