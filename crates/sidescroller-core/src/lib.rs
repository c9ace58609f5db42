//! Core types and definitions for the side-scroller simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, components, level descriptors, input, commands, events,
//! draw commands and frame snapshots. It has no dependency on the ECS
//! or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod level;
pub mod render;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
