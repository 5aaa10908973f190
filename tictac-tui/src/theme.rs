//! Chalkboard theme and color utilities.

use ratatui::style::Color;
use tictac_core::{FieldState, Outcome};

#[derive(Debug, Clone)]
pub struct ChalkTheme {
    pub bg: Color,
    pub bg_highlight: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub crosses: Color,
    pub noughts: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
}

impl ChalkTheme {
    pub fn chalk() -> Self {
        Self {
            bg: Color::Rgb(18, 32, 26),
            bg_highlight: Color::Rgb(46, 74, 60),
            primary: Color::Rgb(240, 240, 220),
            primary_dim: Color::Rgb(150, 150, 135),
            crosses: Color::Rgb(255, 196, 0),
            noughts: Color::Rgb(120, 200, 255),
            success: Color::Rgb(0, 220, 120),
            warning: Color::Rgb(255, 196, 0),
            error: Color::Rgb(255, 80, 80),
            text: Color::Rgb(255, 255, 255),
            text_dim: Color::Rgb(136, 136, 136),
            border: Color::Rgb(90, 110, 100),
        }
    }
}

pub fn field_state_color(state: FieldState, theme: &ChalkTheme) -> Color {
    match state {
        FieldState::X => theme.crosses,
        FieldState::O => theme.noughts,
        FieldState::Empty => theme.text_dim,
    }
}

pub fn outcome_color(outcome: Outcome, theme: &ChalkTheme) -> Color {
    match outcome {
        Outcome::InProgress => theme.primary,
        Outcome::Won(mark) => field_state_color(mark, theme),
        Outcome::Draw => theme.warning,
    }
}
