//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy variety. Drives damage rules and visuals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyKind {
    /// Walking mushroom: dies to one stomp.
    #[default]
    Mushroom,
    /// Armored enemy with a health pool.
    Boss,
    /// Any other authored kind: a plain colored block, dies to one stomp.
    Basic,
}

impl EnemyKind {
    /// Parse an authored kind string. Unknown strings become `Basic`.
    pub fn parse(s: &str) -> Self {
        match s {
            "mushroom" => EnemyKind::Mushroom,
            "boss" => EnemyKind::Boss,
            _ => EnemyKind::Basic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyKind::Mushroom => "mushroom",
            EnemyKind::Boss => "boss",
            EnemyKind::Basic => "basic",
        }
    }
}

/// Enemy lifecycle. `Dead` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    #[default]
    Alive,
    Dead,
}

/// Top-level session state. `Complete` is left only by an explicit rebuild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Running,
    Complete,
}
