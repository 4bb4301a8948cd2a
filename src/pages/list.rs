use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Paragraph, Row, Table},
    Frame,
};

use super::util::{page_block, KeyResult, Shortcut};
use crate::record::{Priority, Record};
use crate::session::Intent;

/// Table page showing every record in insertion order, with delete-last and
/// clear-all actions.
#[derive(Default)]
pub struct ListPage;

impl ListPage {
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyResult {
        match key.code {
            KeyCode::Char('d') => KeyResult::Intent(Intent::RemoveLast),
            KeyCode::Char('c') => KeyResult::Intent(Intent::ClearAll),
            _ => KeyResult::Ignored,
        }
    }

    pub fn shortcuts(&self) -> Vec<Shortcut> {
        vec![
            Shortcut {
                key: "d",
                description: "Delete last",
            },
            Shortcut {
                key: "c",
                description: "Clear all",
            },
        ]
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, records: &[Record]) {
        let block = page_block(" List ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if records.is_empty() {
            self.render_placeholder(frame, inner);
            return;
        }

        let rows = records.iter().map(|record| {
            Row::new(vec![
                Span::from(record.text.clone()),
                Span::styled(
                    record.priority.label(),
                    Style::default().fg(priority_color(record.priority)),
                ),
            ])
        });

        let table = Table::new(rows, [Constraint::Min(20), Constraint::Length(10)])
            .header(
                Row::new(vec!["Task", "Priority"]).style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            )
            .column_spacing(2);
        let table_area = Rect {
            x: inner.x + 2,
            width: inner.width.saturating_sub(4),
            ..inner
        };
        frame.render_widget(table, table_area);
    }

    fn render_placeholder(&self, frame: &mut Frame, inner: Rect) {
        let centered = Layout::vertical([Constraint::Length(1)])
            .flex(ratatui::layout::Flex::Center)
            .split(inner)[0];
        let placeholder = Paragraph::new("No to-dos yet. Add one from the Add Task page.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, centered);
    }
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::Blue,
        Priority::Normal => Color::Yellow,
        Priority::High => Color::Red,
    }
}
