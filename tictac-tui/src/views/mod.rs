//! View rendering dispatch.

pub mod board;
pub mod board_list;

use crate::nav::View;
use crate::state::App;
use crate::widgets::StatusBanner;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by the status banner while it is visible.
const BANNER_HEIGHT: u16 = 3;

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let banner_height = if app.status.is_visible() { BANNER_HEIGHT } else { 0 };
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(banner_height),
            Constraint::Length(3),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);

    match app.active_view {
        View::BoardList => board_list::render(f, app, layout[1]),
        View::Board => board::render(f, app, layout[1]),
    }

    StatusBanner {
        area: app.status.area(),
        text: app.status.text(),
        style: Style::default().fg(app.theme.error).bg(app.theme.bg),
    }
    .render(f, layout[2]);

    render_footer(f, app, layout[3]);
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let activity = if app.pending_requests > 0 { " | loading…" } else { "" };
    let title = format!(
        "TICTAC | Player: {} | {}{}",
        app.player,
        app.active_view.title(),
        activity
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border))
        .title(Span::styled(title, Style::default().fg(app.theme.primary)));
    f.render_widget(block, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = match app.active_view {
        View::BoardList => "j/k move • Enter open • Tab board • r refresh • Esc dismiss • q quit",
        View::Board => "h/j/k/l move • Enter play • Tab boards • r refresh • Esc dismiss • q quit",
    };
    let footer = Paragraph::new(help)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(app.theme.text_dim));
    f.render_widget(footer, area);
}
