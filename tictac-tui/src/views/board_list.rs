//! Board list view.

use crate::state::App;
use crate::theme::outcome_color;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use tictac_core::{Outcome, Player};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .board_list
        .boards
        .iter()
        .map(|record| {
            let outcome = record.board.outcome();
            ListItem::new(Line::from(vec![
                Span::raw(format!(
                    "X {:<16} O {:<16} ",
                    seat(&record.crosses_player),
                    seat(&record.noughts_player)
                )),
                Span::styled(
                    outcome_label(outcome),
                    Style::default().fg(outcome_color(outcome, &app.theme)),
                ),
            ]))
        })
        .collect();

    let title = format!("Boards ({})", items.len());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().bg(app.theme.bg_highlight));

    let mut state = ListState::default();
    state.select(app.board_list.selected_index());
    f.render_stateful_widget(list, area, &mut state);
}

fn seat(player: &Option<Player>) -> &str {
    player.as_ref().map(Player::handle).unwrap_or("-")
}

pub fn outcome_label(outcome: Outcome) -> String {
    match outcome {
        Outcome::InProgress => "in progress".to_string(),
        Outcome::Won(mark) => format!("{} won", mark),
        Outcome::Draw => "draw".to_string(),
    }
}
