//! Session control: the calls a frontend makes to drive the game.
//!
//! Each call bridges the host to the game loop thread through
//! `AppState`'s channel and shared frame.

use std::any::Any;

use sidescroller_core::commands::SessionCommand;
use sidescroller_core::level::LevelDescriptor;
use sidescroller_core::state::FrameSnapshot;
use sidescroller_sim::engine::SimConfig;
use tracing::{error, info};

use crate::error::AppError;
use crate::game_loop;
use crate::library::LevelLibrary;
use crate::state::{AppState, GameLoopCommand};

/// Start a session. Spawns the game loop thread if not already running.
pub fn start_session<F>(
    state: &AppState,
    config: SimConfig,
    descriptor: LevelDescriptor,
    sink: F,
) -> Result<(), AppError>
where
    F: FnMut(&FrameSnapshot) + Send + 'static,
{
    let mut running = state.running.lock().map_err(|_| AppError::LockPoisoned)?;

    if *running {
        return Err(AppError::AlreadyRunning);
    }

    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(config, descriptor, sink, state.latest_frame.clone())?;

    *state.command_tx.lock().map_err(|_| AppError::LockPoisoned)? = Some(cmd_tx);
    *state.loop_thread.lock().map_err(|_| AppError::LockPoisoned)? = Some(handle);
    *running = true;

    info!("session started");
    Ok(())
}

/// Forward a session command to the game loop.
pub fn send_command(state: &AppState, command: SessionCommand) -> Result<(), AppError> {
    send(state, GameLoopCommand::Session(command))
}

/// Load `file_name` from the library and make it the active descriptor.
pub fn load_level_file(
    state: &AppState,
    library: &LevelLibrary,
    file_name: &str,
) -> Result<(), AppError> {
    let descriptor = library.load(file_name)?;
    send_command(state, SessionCommand::LoadDescriptor { descriptor })
}

/// Get the latest frame synchronously (for polling / initial state).
pub fn latest_frame(state: &AppState) -> Result<Option<FrameSnapshot>, AppError> {
    let lock = state.latest_frame.lock().map_err(|_| AppError::LockPoisoned)?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for its thread to exit.
pub fn stop_session(state: &AppState) -> Result<(), AppError> {
    let mut running = state.running.lock().map_err(|_| AppError::LockPoisoned)?;
    if !*running {
        return Err(AppError::NotStarted);
    }

    if let Some(tx) = state
        .command_tx
        .lock()
        .map_err(|_| AppError::LockPoisoned)?
        .take()
    {
        // A loop that already exited has dropped its receiver.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    let handle = state
        .loop_thread
        .lock()
        .map_err(|_| AppError::LockPoisoned)?
        .take();
    *running = false;

    if let Some(handle) = handle {
        if let Err(payload) = handle.join() {
            let message = panic_message(payload.as_ref());
            error!(%message, "game loop panicked");
            return Err(AppError::LoopPanicked(message));
        }
    }

    info!("session stopped");
    Ok(())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}

fn send(state: &AppState, command: GameLoopCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock().map_err(|_| AppError::LockPoisoned)?;

    match tx_lock.as_ref() {
        Some(tx) => tx.send(command).map_err(|_| AppError::ChannelClosed),
        None => Err(AppError::NotStarted),
    }
}
