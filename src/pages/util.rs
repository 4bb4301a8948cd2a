use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};

use crate::session::Intent;

/// Keyboard shortcut display with key and description
#[derive(Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub description: &'static str,
}

/// Outcome of offering a key event to the active page.
pub enum KeyResult {
    Consumed,
    Ignored,
    Intent(Intent),
}

pub fn page_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
        .title_style(Style::default().fg(Color::Cyan))
}
