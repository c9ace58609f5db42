//! Simulation engine for the side-scroller.
//!
//! Owns the hecs ECS world, runs systems once per display refresh,
//! and produces `FrameSnapshot`s (state plus draw list) for the host.

pub mod engine;
pub mod queries;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use sidescroller_core as core;
