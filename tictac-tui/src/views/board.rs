//! Single board view.

use crate::state::App;
use crate::theme::{field_state_color, outcome_color};
use crate::views::board_list::outcome_label;
use crate::widgets::grid::GridStyle;
use crate::widgets::BoardGrid;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tictac_core::FieldState;

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(record) = app.board_view.record.as_ref() else {
        let empty = Paragraph::new("No board selected. Press Tab to pick one.")
            .block(Block::default().title("Board").borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let theme = &app.theme;
    BoardGrid {
        title: "Board",
        board: &record.board,
        cursor: Some(app.board_view.cursor),
        style: GridStyle {
            crosses: Style::default().fg(field_state_color(FieldState::X, theme)),
            noughts: Style::default().fg(field_state_color(FieldState::O, theme)),
            empty: Style::default().fg(field_state_color(FieldState::Empty, theme)),
            cursor: Style::default()
                .bg(theme.bg_highlight)
                .add_modifier(Modifier::BOLD),
            rule: Style::default().fg(theme.border),
        },
    }
    .render(f, columns[0]);

    let outcome = record.board.outcome();
    let turn = record
        .board
        .next_turn()
        .map(|mark| format!("{} to move", mark))
        .unwrap_or_else(|| "finished".to_string());
    let details = format!(
        "{}\n\nStatus: {}\nTurn: {}",
        record,
        outcome_label(outcome),
        turn
    );
    let panel = Paragraph::new(details)
        .style(Style::default().fg(outcome_color(outcome, theme)))
        .block(Block::default().title("Details").borders(Borders::ALL));
    f.render_widget(panel, columns[1]);
}
