//! Board grid widget.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tictac_core::{Board, FieldState, BOARD_SIZE};

#[derive(Debug, Clone)]
pub struct GridStyle {
    pub crosses: Style,
    pub noughts: Style,
    pub empty: Style,
    pub cursor: Style,
    pub rule: Style,
}

pub struct BoardGrid<'a> {
    pub title: &'a str,
    pub board: &'a Board,
    pub cursor: Option<(usize, usize)>,
    pub style: GridStyle,
}

impl<'a> BoardGrid<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let mut lines = Vec::with_capacity(BOARD_SIZE * 2);
        for (row, cells) in self.board.rows().enumerate() {
            if row > 0 {
                lines.push(Line::from(Span::styled("───┼───┼───", self.style.rule)));
            }
            let mut spans = Vec::with_capacity(BOARD_SIZE * 2);
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    spans.push(Span::styled("│", self.style.rule));
                }
                spans.push(Span::styled(format!(" {} ", cell.as_char()), self.cell_style(row, col, *cell)));
            }
            lines.push(Line::from(spans));
        }

        let widget = Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .block(Block::default().title(self.title).borders(Borders::ALL));
        f.render_widget(widget, area);
    }

    fn cell_style(&self, row: usize, col: usize, cell: FieldState) -> Style {
        let base = match cell {
            FieldState::X => self.style.crosses,
            FieldState::O => self.style.noughts,
            FieldState::Empty => self.style.empty,
        };
        if self.cursor == Some((row, col)) {
            base.patch(self.style.cursor)
        } else {
            base
        }
    }
}
