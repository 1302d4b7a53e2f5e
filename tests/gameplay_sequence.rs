use grid_snake::config::{BOARD_SIZE, INITIAL_TICK_INTERVAL_MS};
use grid_snake::engine::GameEngine;
use grid_snake::input::Direction;
use grid_snake::snake::Position;

/// Picks the next step toward `target`, sidestepping when the direct move
/// would be a rejected reversal.
fn step_toward(head: Position, target: Position, current: Direction) -> Direction {
    let wanted = if target.x < head.x {
        Direction::Left
    } else if target.x > head.x {
        Direction::Right
    } else if target.y < head.y {
        Direction::Up
    } else {
        Direction::Down
    };

    if wanted != current.opposite() {
        return wanted;
    }

    // Sidestep toward the board center to stay clear of the walls.
    match current {
        Direction::Up | Direction::Down => {
            if head.x < i32::from(BOARD_SIZE.width) / 2 {
                Direction::Right
            } else {
                Direction::Left
            }
        }
        Direction::Left | Direction::Right => {
            if head.y < i32::from(BOARD_SIZE.height) / 2 {
                Direction::Down
            } else {
                Direction::Up
            }
        }
    }
}

#[test]
fn full_round_start_eat_crash_reset() {
    let mut engine = GameEngine::new_with_seed(BOARD_SIZE, 42);

    let state = engine.state();
    assert_eq!(state.snake.len(), 1);
    assert_eq!(state.snake.head(), Position { x: 12, y: 12 });
    assert_eq!(state.direction, Direction::Down);
    assert!(state.food.is_none());
    assert!(!state.game_started);

    engine.start();
    let food = engine.state().food.expect("start must place a food");
    let expected_points = food.points();

    // Steer to the food. The snake is one cell long, so only walls could end
    // the game, and the steering never walks into one.
    let mut steps = 0;
    while engine.state().score == 0 {
        assert!(steps < 200, "steering should reach the food quickly");
        let head = engine.state().snake.head();
        let target = engine.state().food.expect("food stays present").position;
        let direction = step_toward(head, target, engine.state().direction);

        engine.set_direction(direction);
        engine.advance();
        assert!(!engine.state().game_over, "steering must not crash");
        steps += 1;
    }

    let state = engine.state();
    assert_eq!(state.score, expected_points);
    assert_eq!(state.snake.len(), 2);
    assert_eq!(state.speed_ms, INITIAL_TICK_INTERVAL_MS - 5);
    assert!(state.food.is_some(), "eaten food must be replaced");

    // Head for the left wall. A direct turn would be a reversal if the snake
    // is currently moving right, so detour one row first.
    if engine.state().direction == Direction::Right {
        let detour = if engine.state().snake.head().y > 0 {
            Direction::Up
        } else {
            Direction::Down
        };
        engine.set_direction(detour);
        engine.advance();
        assert!(!engine.state().game_over);
    }
    engine.set_direction(Direction::Left);

    let mut steps = 0;
    loop {
        assert!(steps < 40, "the left wall is at most 25 cells away");
        let before = engine.state().snake.clone();
        engine.advance();
        if engine.state().game_over {
            // The fatal move must not touch the snake.
            assert_eq!(engine.state().snake, before);
            break;
        }
        steps += 1;
    }
    assert!(engine.state().game_started, "game over does not un-start");

    // A stale tick after the crash changes nothing.
    let frozen = engine.state().snake.clone();
    engine.advance();
    assert_eq!(engine.state().snake, frozen);

    // Reset restores the documented defaults and places a food.
    engine.reset();
    let state = engine.state();
    assert_eq!(state.snake.len(), 1);
    assert_eq!(state.snake.head(), Position { x: 12, y: 12 });
    assert_eq!(state.direction, Direction::Down);
    assert_eq!(state.pending_direction, Direction::Down);
    assert_eq!(state.score, 0);
    assert_eq!(state.speed_ms, INITIAL_TICK_INTERVAL_MS);
    assert!(!state.game_started);
    assert!(!state.game_over);
    assert!(state.food.is_some());
}
