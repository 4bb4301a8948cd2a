use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::util::{page_block, KeyResult, Shortcut};

const THEME_SNIPPET: [&str; 7] = [
    "# theme.toml example",
    "[theme]",
    "base = \"dark\"",
    "primary_color = \"#F97316\"",
    "background_color = \"#0B1220\"",
    "secondary_background_color = \"#111B2E\"",
    "text_color = \"#E5E7EB\"",
];

/// Static help page. Accepts no keys that mutate anything.
#[derive(Default)]
pub struct SettingsPage;

impl SettingsPage {
    pub fn handle_key(&mut self, _key: KeyEvent) -> KeyResult {
        KeyResult::Ignored
    }

    pub fn shortcuts(&self) -> Vec<Shortcut> {
        Vec::new()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = page_block(" Settings ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Theme tips",
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(
                "  A theme config changes the whole UI. Example:",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
        ];
        for snippet_line in THEME_SNIPPET {
            lines.push(Line::from(Span::styled(
                format!("    {snippet_line}"),
                Style::default().fg(Color::Green),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Everything here is per-session: to-dos are gone when the app exits.",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }
}
