use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{
    CELL_SIZE, GridSize, INITIAL_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS,
    TICK_INTERVAL_DECREMENT_MS,
};
use crate::food::Food;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Movement direction of a fresh playthrough.
pub const INITIAL_DIRECTION: Direction = Direction::Down;

/// Complete game state for one session.
///
/// Owned by [`GameEngine`] and mutated exclusively through its operations;
/// everything else sees it as a read-only snapshot.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    /// Direction the snake moved along on the last tick.
    pub direction: Direction,
    /// Direction committed at the start of the next tick.
    pub pending_direction: Direction,
    /// Absent until the first `start` or `reset` places one.
    pub food: Option<Food>,
    pub score: u32,
    pub game_started: bool,
    pub game_over: bool,
    /// Tick interval in milliseconds; smaller means faster gameplay.
    pub speed_ms: u64,
    pub bounds: GridSize,
    /// Presentation hint for square cell rendering; unused by the rules.
    pub cell_size: u16,
}

impl GameState {
    /// Documented initial defaults: one segment at the board center, moving
    /// down at the base speed, nothing started.
    fn initial(bounds: GridSize) -> Self {
        let center = Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };

        Self {
            snake: Snake::new(center),
            direction: INITIAL_DIRECTION,
            pending_direction: INITIAL_DIRECTION,
            food: None,
            score: 0,
            game_started: false,
            game_over: false,
            speed_ms: INITIAL_TICK_INTERVAL_MS,
            bounds,
            cell_size: CELL_SIZE,
        }
    }
}

/// Callback invoked with the fresh state after every mutating operation.
type Listener = Box<dyn FnMut(&GameState)>;

/// Sole owner and mutator of [`GameState`]; enforces all game rules.
///
/// Constructed explicitly by whoever composes the application and passed to
/// the scheduler and presentation bindings. Rule violations never surface as
/// errors: illegal input is a silent no-op, fatal moves become the game-over
/// state.
pub struct GameEngine {
    state: GameState,
    rng: StdRng,
    listeners: Vec<Listener>,
}

impl GameEngine {
    /// Creates an engine with entropy-seeded food placement.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::from_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic engine for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::from_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn from_rng(bounds: GridSize, rng: StdRng) -> Self {
        Self {
            state: GameState::initial(bounds),
            rng,
            listeners: Vec::new(),
        }
    }

    /// Returns the current state as a read-only snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Registers a listener notified after every state change.
    ///
    /// Rejected inputs and guarded no-op ticks publish nothing.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Marks the session as running and places a food.
    ///
    /// Not guarded against mid-game calls: invoked while already playing it
    /// re-spawns the food and changes nothing else. Input routing only issues
    /// it from the start screen.
    pub fn start(&mut self) {
        self.state.game_started = true;
        self.state.game_over = false;
        self.spawn_food();
        self.publish();
    }

    /// Restores the initial defaults and places a fresh food.
    ///
    /// Leaves the session on the start screen (`game_started` false).
    pub fn reset(&mut self) {
        self.state = GameState::initial(self.state.bounds);
        self.spawn_food();
        self.publish();
    }

    /// Requests a direction change, applied at the start of the next tick.
    ///
    /// A reversal of the current direction is silently ignored; committing it
    /// would fold the head straight into the neck.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction == self.state.direction.opposite() {
            return;
        }

        self.state.pending_direction = direction;
        self.publish();
    }

    /// Applies one movement tick.
    ///
    /// A guarded no-op outside active play. On collision the game ends with
    /// the snake exactly as it was; the fatal head is never appended.
    pub fn advance(&mut self) {
        if !self.state.game_started || self.state.game_over {
            return;
        }

        self.state.direction = self.state.pending_direction;
        let next_head = self.state.snake.head().stepped(self.state.direction);

        if self.check_collision(next_head) {
            self.state.game_over = true;
            self.publish();
            return;
        }

        self.state.snake.push_head(next_head);

        if self.check_food_collision(next_head) {
            self.state.score += self.state.food.map_or(0, Food::points);
            self.spawn_food();
            self.increase_speed();
        } else {
            self.state.snake.pop_tail();
        }

        self.publish();
    }

    /// Returns true when `position` lies outside the board or on a body
    /// segment.
    ///
    /// Body means segments at index 1 and beyond of the current snake; the
    /// cell the head occupies right now is not a collision.
    #[must_use]
    pub fn check_collision(&self, position: Position) -> bool {
        !position.is_within_bounds(self.state.bounds) || self.state.snake.body_occupies(position)
    }

    /// Returns true when a food is present at `position`.
    #[must_use]
    pub fn check_food_collision(&self, position: Position) -> bool {
        self.state
            .food
            .is_some_and(|food| food.position == position)
    }

    fn spawn_food(&mut self) {
        self.state.food = Some(Food::spawn(
            &mut self.rng,
            self.state.bounds,
            &self.state.snake,
        ));
    }

    /// Shortens the tick interval by one step, clamped to the floor.
    fn increase_speed(&mut self) {
        if self.state.speed_ms > MIN_TICK_INTERVAL_MS {
            self.state.speed_ms = self
                .state
                .speed_ms
                .saturating_sub(TICK_INTERVAL_DECREMENT_MS)
                .max(MIN_TICK_INTERVAL_MS);
        }
    }

    fn publish(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.state);
        }
    }
}
