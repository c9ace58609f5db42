//! Commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::level::LevelDescriptor;

/// All host-originated actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionCommand {
    // --- Input ---
    /// A key went down (`KeyboardEvent.code`).
    KeyDown { code: String },
    /// A key went up.
    KeyUp { code: String },

    // --- Display ---
    /// The physical canvas changed size.
    Resize { width: f32, height: f32 },

    // --- Level control (each rebuilds the simulation) ---
    /// Switch to another level of the loaded descriptor.
    SelectLevel { index: usize },
    /// Replace the descriptor and start at its first level.
    LoadDescriptor { descriptor: LevelDescriptor },
    /// Rebuild the current level from scratch.
    Restart,
}

impl SessionCommand {
    /// Whether this command discards the running simulation state.
    pub fn rebuilds(&self) -> bool {
        matches!(
            self,
            SessionCommand::SelectLevel { .. }
                | SessionCommand::LoadDescriptor { .. }
                | SessionCommand::Restart
        )
    }
}
