use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{GridSize, Theme};
use crate::engine::GameState;
use crate::food::FoodKind;
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_start_menu};

const GLYPH_SNAKE_HEAD_UP: &str = "▲";
const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";
const GLYPH_SNAKE_BODY: &str = "█";
const GLYPH_SNAKE_TAIL: &str = "▓";
const GLYPH_FOOD: &str = "●";

/// Renders one full frame from an immutable state snapshot.
pub fn render(frame: &mut Frame<'_>, state: &GameState, session_best: u32, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, session_best, theme);
    let board_area = centered_board(play_area, state.bounds);

    let block = Block::bordered().border_style(Style::new().fg(theme.border));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    if state.game_over {
        render_game_over_menu(frame, board_area, state.score, session_best, theme);
    } else if !state.game_started {
        render_start_menu(frame, board_area, theme);
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some(food) = state.food else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, state.bounds, food.position) else {
        return;
    };

    let color = match food.kind {
        FoodKind::Regular => theme.food_regular,
        FoodKind::Gold => theme.food_gold,
    };
    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(color));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake.head();
    let tail = state.snake.segments().last().copied();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds, *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                head_glyph(state.direction),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
            continue;
        }

        if Some(*segment) == tail {
            buffer.set_string(x, y, GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail));
            continue;
        }

        buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

/// Centers the bordered board inside the available area, clamped to fit.
fn centered_board(area: Rect, bounds: GridSize) -> Rect {
    let width = bounds.width.saturating_add(2).min(area.width);
    let height = bounds.height.saturating_add(2).min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
