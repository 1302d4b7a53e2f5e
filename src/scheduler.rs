use std::time::{Duration, Instant};

use crate::engine::GameEngine;
use crate::input::GameInput;

/// Drives [`GameEngine::advance`] from a frame-cadence callback and routes
/// raw input into engine operations. Owns no game rules.
///
/// Frames may arrive far more often than the logical tick rate (the render
/// loop runs at ~60 fps, ticks start at 500 ms apart). A tick fires only once
/// the elapsed wall-clock time since the last tick reaches the engine's
/// current interval, so a missed or delayed frame simply applies on the next
/// one with correct elapsed-time accounting.
#[derive(Debug)]
pub struct TickScheduler {
    last_advance: Instant,
}

impl TickScheduler {
    /// Creates a scheduler with its tick baseline at `now`.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self { last_advance: now }
    }

    /// Handles one frame callback at timestamp `now`.
    ///
    /// Returns true when a tick was applied. Frames delivered outside active
    /// play are dropped regardless of elapsed time, so a stale callback after
    /// game over can never advance the state.
    pub fn on_frame(&mut self, engine: &mut GameEngine, now: Instant) -> bool {
        let state = engine.state();
        if !state.game_started || state.game_over {
            return false;
        }

        if now.duration_since(self.last_advance) < Duration::from_millis(state.speed_ms) {
            return false;
        }

        engine.advance();
        self.last_advance = now;
        true
    }

    /// Routes one input event according to the current game phase.
    ///
    /// Directional input only reaches the engine during active play. Confirm
    /// starts a not-yet-started game (re-arming the tick baseline to `now`)
    /// or resets a finished one, and does nothing mid-game. Quit is the
    /// caller's concern.
    pub fn handle_input(&mut self, engine: &mut GameEngine, input: GameInput, now: Instant) {
        let (started, over) = {
            let state = engine.state();
            (state.game_started, state.game_over)
        };

        match input {
            GameInput::Direction(direction) => {
                if started && !over {
                    engine.set_direction(direction);
                }
            }
            GameInput::Confirm => {
                if over {
                    engine.reset();
                } else if !started {
                    engine.start();
                    self.last_advance = now;
                }
            }
            GameInput::Quit => {}
        }
    }
}
