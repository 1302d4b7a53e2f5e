use rand::Rng;

use crate::config::{
    FOOD_SPAWN_MAX_ATTEMPTS, GOLD_FOOD_POINTS, GOLD_FOOD_PROBABILITY, GridSize,
    REGULAR_FOOD_POINTS,
};
use crate::snake::{Position, Snake};

/// Food variant determining its score value.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FoodKind {
    Regular,
    Gold,
}

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
    pub kind: FoodKind,
}

impl Food {
    /// Creates a regular food at `position`.
    #[must_use]
    pub fn regular(position: Position) -> Self {
        Self {
            position,
            kind: FoodKind::Regular,
        }
    }

    /// Creates a gold food at `position`.
    #[must_use]
    pub fn gold(position: Position) -> Self {
        Self {
            position,
            kind: FoodKind::Gold,
        }
    }

    /// Returns the score value granted when eaten.
    #[must_use]
    pub fn points(self) -> u32 {
        match self.kind {
            FoodKind::Regular => REGULAR_FOOD_POINTS,
            FoodKind::Gold => GOLD_FOOD_POINTS,
        }
    }

    /// Spawns a food in a random cell, avoiding the snake where possible.
    ///
    /// Positions are rejection-sampled against the snake up to
    /// [`FOOD_SPAWN_MAX_ATTEMPTS`] times. On a nearly full board the attempts
    /// can run out; the last sample is then kept even if it overlaps a
    /// segment. This is an approximation, not a guarantee; a stricter
    /// implementation would enumerate the free cells instead.
    ///
    /// The kind is drawn independently of the position: gold with probability
    /// [`GOLD_FOOD_PROBABILITY`], regular otherwise.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Self {
        let mut position = random_position(rng, bounds);
        let mut attempts = 1;
        while attempts < FOOD_SPAWN_MAX_ATTEMPTS && snake.occupies(position) {
            position = random_position(rng, bounds);
            attempts += 1;
        }

        if rng.gen_bool(GOLD_FOOD_PROBABILITY) {
            Self::gold(position)
        } else {
            Self::regular(position)
        }
    }
}

fn random_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}
