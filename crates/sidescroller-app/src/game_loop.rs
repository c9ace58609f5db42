//! Game loop thread: runs the simulation engine at 60Hz and emits frames.
//!
//! The engine is created inside this thread so it never crosses a thread
//! boundary. Commands arrive via an `mpsc` channel. Frames go to a
//! caller-provided sink and are stored in shared state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::debug;

use sidescroller_core::constants::TICK_RATE;
use sidescroller_core::level::LevelDescriptor;
use sidescroller_core::state::FrameSnapshot;
use sidescroller_sim::engine::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop<F>(
    config: SimConfig,
    descriptor: LevelDescriptor,
    sink: F,
    latest_frame: Arc<Mutex<Option<FrameSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)>
where
    F: FnMut(&FrameSnapshot) + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("sidescroller-game-loop".into())
        .spawn(move || {
            run_game_loop(config, descriptor, sink, cmd_rx, &latest_frame);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop<F>(
    config: SimConfig,
    descriptor: LevelDescriptor,
    mut sink: F,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_frame: &Mutex<Option<FrameSnapshot>>,
) where
    F: FnMut(&FrameSnapshot),
{
    let mut engine = SimulationEngine::new(config, descriptor);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Session(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick. Nothing is scheduled once the level is
        //    complete: block until the host sends something.
        let Some(frame) = engine.tick() else {
            debug!("level complete, waiting for a command");
            match cmd_rx.recv() {
                Ok(GameLoopCommand::Session(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::RecvError) => return,
            }
            next_tick_time = Instant::now();
            continue;
        };

        // 3. Emit frame
        sink(&frame);

        // 4. Store latest frame for synchronous polling
        if let Ok(mut lock) = latest_frame.lock() {
            *lock = Some(frame);
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
