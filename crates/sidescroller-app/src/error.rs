//! Host-side error type.

use thiserror::Error;

use sidescroller_core::level::LevelError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("session already running")]
    AlreadyRunning,
    #[error("session not started")]
    NotStarted,
    #[error("game loop channel closed")]
    ChannelClosed,
    #[error("game loop panicked: {0}")]
    LoopPanicked(String),
    #[error("shared state lock poisoned")]
    LockPoisoned,
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("no level file named {0:?}")]
    UnknownLevelFile(String),
}
