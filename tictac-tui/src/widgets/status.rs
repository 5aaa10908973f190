//! Status banner widget and the handles it renders from.

use crate::notifications::{StatusArea, StatusText};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Banner container. Starts hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerArea {
    hidden: bool,
}

impl Default for BannerArea {
    fn default() -> Self {
        Self { hidden: true }
    }
}

impl StatusArea for BannerArea {
    fn show(&mut self) {
        self.hidden = false;
    }

    fn hide(&mut self) {
        self.hidden = true;
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Banner message slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannerText {
    text: String,
}

impl StatusText for BannerText {
    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    fn text(&self) -> &str {
        &self.text
    }
}

pub struct StatusBanner<'a> {
    pub area: &'a BannerArea,
    pub text: &'a BannerText,
    pub style: Style,
}

impl StatusBanner<'_> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        if self.area.is_hidden() {
            return;
        }
        let paragraph = Paragraph::new(self.text.text().to_string())
            .style(self.style.add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Status").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}
