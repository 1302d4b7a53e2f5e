use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
///
/// Replaces anonymous `(u16, u16)` tuples for bounds, making width vs.
/// height unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

/// Fixed board dimensions for a session.
pub const BOARD_SIZE: GridSize = GridSize {
    width: 25,
    height: 25,
};

/// Presentation hint for square cell rendering, in pixels.
///
/// Carried in the state snapshot for graphical front ends; no game rule
/// reads it.
pub const CELL_SIZE: u16 = 20;

/// Tick interval at the start of a playthrough, in milliseconds.
pub const INITIAL_TICK_INTERVAL_MS: u64 = 500;

/// Floor for the tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 50;

/// Tick interval reduction applied per food eaten, in milliseconds.
pub const TICK_INTERVAL_DECREMENT_MS: u64 = 5;

/// Probability that a spawned food is gold rather than regular.
pub const GOLD_FOOD_PROBABILITY: f64 = 0.2;

/// Score value of a regular food.
pub const REGULAR_FOOD_POINTS: u32 = 10;

/// Score value of a gold food.
pub const GOLD_FOOD_POINTS: u32 = 50;

/// Retry cap when sampling a free cell for food placement.
pub const FOOD_SPAWN_MAX_ATTEMPTS: u32 = 100;

/// Render loop poll interval in milliseconds (~60 fps).
pub const FRAME_INTERVAL_MS: u64 = 16;

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food_regular: Color,
    pub food_gold: Color,
    pub border: Color,
    pub hud: Color,
    pub overlay_title: Color,
    pub overlay_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food_regular: Color::Red,
    food_gold: Color::Yellow,
    border: Color::White,
    hud: Color::White,
    overlay_title: Color::Green,
    overlay_footer: Color::DarkGray,
};
