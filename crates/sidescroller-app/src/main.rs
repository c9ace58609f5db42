//! Headless sidescroller runner.
//!
//! Loads a level file, runs the game loop in real time for a while and
//! reports the outcome.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use sidescroller_app::control;
use sidescroller_app::error::AppError;
use sidescroller_app::library::LevelLibrary;
use sidescroller_app::state::AppState;
use sidescroller_core::commands::SessionCommand;
use sidescroller_core::enums::SessionPhase;
use sidescroller_core::events::GameEvent;
use sidescroller_core::level::LevelDescriptor;
use sidescroller_core::types::Viewport;
use sidescroller_sim::engine::SimConfig;

/// Run a sidescroller level without a window
#[derive(Parser, Debug)]
#[command(name = "sidescroller")]
#[command(about = "Run a sidescroller level headlessly and report the result")]
struct Args {
    /// Directory holding level descriptor files (*.json)
    #[arg(long, default_value = "levels")]
    levels_dir: PathBuf,

    /// Level file to load from the directory (defaults to the first)
    #[arg(long)]
    file: Option<String>,

    /// Level within the file
    #[arg(long, default_value_t = 0)]
    level_index: usize,

    /// Random seed for deterministic runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 960.0)]
    width: f32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 540.0)]
    height: f32,

    /// Wall-clock seconds to run
    #[arg(long, default_value_t = 5.0)]
    seconds: f64,

    /// Hold the right key for the whole run
    #[arg(long)]
    hold_right: bool,

    /// Print the last frame as JSON
    #[arg(long)]
    print_frame: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let library = LevelLibrary::scan(&args.levels_dir)?;
    for file in library.files() {
        info!(file = %file.file_name, name = %file.display_name, "found level file");
    }

    let descriptor = match args.file.as_deref().or_else(|| {
        library.files().first().map(|f| f.file_name.as_str())
    }) {
        Some(file_name) => library.load(file_name)?,
        None => LevelDescriptor::default(),
    };

    let config = SimConfig {
        seed: args.seed,
        viewport: Viewport::new(args.width, args.height),
    };

    let state = AppState::new();
    let (event_tx, event_rx) = std::sync::mpsc::channel::<GameEvent>();
    control::start_session(&state, config, descriptor, move |frame| {
        for event in &frame.events {
            let _ = event_tx.send(event.clone());
        }
    })?;

    if args.level_index != 0 {
        control::send_command(
            &state,
            SessionCommand::SelectLevel {
                index: args.level_index,
            },
        )?;
    }
    if args.hold_right {
        control::send_command(
            &state,
            SessionCommand::KeyDown {
                code: "ArrowRight".into(),
            },
        )?;
    }

    std::thread::sleep(Duration::from_secs_f64(args.seconds.max(0.0)));
    let frame = control::latest_frame(&state)?;
    control::stop_session(&state)?;

    let mut stomps = 0usize;
    let mut hits = 0usize;
    let mut completed = false;
    for event in event_rx.try_iter() {
        match event {
            GameEvent::EnemyStomped { .. } | GameEvent::BossHit { .. } => stomps += 1,
            GameEvent::PlayerHit { .. } => hits += 1,
            GameEvent::LevelComplete { .. } => completed = true,
            GameEvent::ProjectileFired { .. } => {}
        }
    }

    match &frame {
        Some(frame) => info!(
            level = %frame.level_name,
            tick = frame.time.tick,
            health = frame.health,
            player_x = frame.player.pos.x,
            complete = completed || frame.phase == SessionPhase::Complete,
            stomps,
            hits,
            "run finished"
        ),
        None => info!("run finished before the first frame"),
    }

    if args.print_frame {
        if let Some(frame) = &frame {
            match serde_json::to_string_pretty(frame) {
                Ok(json) => println!("{json}"),
                Err(err) => error!("failed to encode frame: {err}"),
            }
        }
    }
    Ok(())
}
