use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::engine::GameState;

/// Renders the one-line HUD and returns the remaining play area below it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    session_best: u32,
    theme: &Theme,
) -> Rect {
    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let line = Line::from(vec![
        Span::styled(format!("Score {}", state.score), Style::new().fg(theme.hud)),
        Span::raw("   "),
        Span::styled(format!("Best {session_best}"), Style::new().fg(theme.hud)),
        Span::raw("   "),
        Span::styled(
            format!("{} ms/tick", state.speed_ms),
            Style::new().fg(theme.overlay_footer),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), hud_area);

    play_area
}
