use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// High-level input events consumed by the scheduler.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Confirm,
    Quit,
}

/// Waits up to `timeout` for a key press and maps it to a game input.
///
/// Returns `Ok(None)` on timeout, on non-key events (resize, focus), and on
/// keys without a binding. Key repeat and release events are dropped so a
/// held key does not flood the direction buffer on Windows terminals.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    let Event::Key(key) = event::read()? else {
        return Ok(None);
    };
    if key.kind != KeyEventKind::Press {
        return Ok(None);
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(Some(GameInput::Quit));
    }

    Ok(map_key(key.code))
}

/// Maps a key code to its game input, if it has one.
#[must_use]
pub fn map_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameInput::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use super::{Direction, GameInput, map_key};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(
            map_key(KeyCode::Up),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            map_key(KeyCode::Down),
            Some(GameInput::Direction(Direction::Down))
        );
        assert_eq!(
            map_key(KeyCode::Left),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(
            map_key(KeyCode::Right),
            Some(GameInput::Direction(Direction::Right))
        );
    }

    #[test]
    fn wasd_maps_to_directions() {
        assert_eq!(
            map_key(KeyCode::Char('w')),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            map_key(KeyCode::Char('s')),
            Some(GameInput::Direction(Direction::Down))
        );
        assert_eq!(
            map_key(KeyCode::Char('a')),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(
            map_key(KeyCode::Char('d')),
            Some(GameInput::Direction(Direction::Right))
        );
    }

    #[test]
    fn confirm_and_quit_bindings() {
        assert_eq!(map_key(KeyCode::Char(' ')), Some(GameInput::Confirm));
        assert_eq!(map_key(KeyCode::Enter), Some(GameInput::Confirm));
        assert_eq!(map_key(KeyCode::Char('q')), Some(GameInput::Quit));
        assert_eq!(map_key(KeyCode::Esc), Some(GameInput::Quit));
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(map_key(KeyCode::Char('x')), None);
        assert_eq!(map_key(KeyCode::Tab), None);
    }
}
