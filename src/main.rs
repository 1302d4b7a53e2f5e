use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use clap::Parser;

use grid_snake::config::{BOARD_SIZE, FRAME_INTERVAL_MS, THEME_CLASSIC};
use grid_snake::engine::GameEngine;
use grid_snake::error::AppError;
use grid_snake::input::{self, GameInput};
use grid_snake::renderer;
use grid_snake::scheduler::TickScheduler;
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for the food spawner, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    install_panic_hook();

    let mut engine = match cli.seed {
        Some(seed) => GameEngine::new_with_seed(BOARD_SIZE, seed),
        None => GameEngine::new(BOARD_SIZE),
    };

    // Best score of this session, fed by the engine's publish step. High
    // scores are not persisted across runs.
    let session_best = Rc::new(Cell::new(0u32));
    let best = Rc::clone(&session_best);
    engine.subscribe(move |state| {
        if state.score > best.get() {
            best.set(state.score);
        }
    });

    let mut session = TerminalSession::enter()?;
    ensure_terminal_fits(&mut session)?;
    run(&mut session, &mut engine, &session_best)
}

fn run(
    session: &mut TerminalSession,
    engine: &mut GameEngine,
    session_best: &Rc<Cell<u32>>,
) -> Result<(), AppError> {
    let mut scheduler = TickScheduler::new(Instant::now());
    let frame_timeout = Duration::from_millis(FRAME_INTERVAL_MS);

    loop {
        session.terminal_mut().draw(|frame| {
            renderer::render(frame, engine.state(), session_best.get(), &THEME_CLASSIC);
        })?;

        if let Some(game_input) = input::poll_input(frame_timeout)? {
            if game_input == GameInput::Quit {
                return Ok(());
            }
            scheduler.handle_input(engine, game_input, Instant::now());
        }

        scheduler.on_frame(engine, Instant::now());
    }
}

fn ensure_terminal_fits(session: &mut TerminalSession) -> Result<(), AppError> {
    let size = session.terminal_mut().size()?;
    // Bordered board plus the HUD line above it.
    let needed_width = BOARD_SIZE.width + 2;
    let needed_height = BOARD_SIZE.height + 3;

    if size.width < needed_width || size.height < needed_height {
        return Err(AppError::TerminalTooSmall {
            width: size.width,
            height: size.height,
            needed_width,
            needed_height,
        });
    }

    Ok(())
}
