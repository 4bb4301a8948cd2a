use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::util::{page_block, KeyResult, Shortcut};
use crate::record::Priority;
use crate::session::Intent;

const PLACEHOLDER: &str = "e.g. Submit assignment";

/// Form page: a single-line text input plus a priority selector. Submission
/// is validated by the record store; this page only collects the values.
pub struct AddPage {
    text: String,
    /// Cursor position in chars, not bytes; the input accepts arbitrary text.
    cursor: usize,
    priority_index: usize,
}

impl Default for AddPage {
    fn default() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            priority_index: 0,
        }
    }
}

impl AddPage {
    pub fn priority(&self) -> Priority {
        Priority::all()[self.priority_index]
    }

    /// Resets the form after a successful save.
    pub fn reset(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.priority_index = 0;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyResult {
        match key.code {
            KeyCode::Enter => KeyResult::Intent(Intent::Submit {
                text: self.text.clone(),
                priority: self.priority(),
            }),
            KeyCode::Up => {
                let count = Priority::all().len();
                self.priority_index = (self.priority_index + count - 1) % count;
                KeyResult::Consumed
            }
            KeyCode::Down => {
                self.priority_index = (self.priority_index + 1) % Priority::all().len();
                KeyResult::Consumed
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.text.remove(self.byte_index());
                }
                KeyResult::Consumed
            }
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                KeyResult::Consumed
            }
            KeyCode::Right => {
                if self.cursor < self.text.chars().count() {
                    self.cursor += 1;
                }
                KeyResult::Consumed
            }
            KeyCode::Char(c) => {
                let index = self.byte_index();
                self.text.insert(index, c);
                self.cursor += 1;
                KeyResult::Consumed
            }
            _ => KeyResult::Ignored,
        }
    }

    /// Byte offset of the char cursor, for `String` edits.
    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.text.len())
    }

    pub fn shortcuts(&self) -> Vec<Shortcut> {
        vec![
            Shortcut {
                key: "Enter",
                description: "Save",
            },
            Shortcut {
                key: "Up/Down",
                description: "Priority",
            },
        ]
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = page_block(" Add Task ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1), // pad
            Constraint::Length(1), // input label
            Constraint::Length(1), // input
            Constraint::Length(1), // pad
            Constraint::Length(1), // priority label
            Constraint::Length(1), // priority selector
            Constraint::Length(1), // pad
            Constraint::Length(1), // hints
            Constraint::Min(0),    // pad
        ])
        .split(inner);

        let label = |text| {
            Paragraph::new(Span::styled(text, Style::default().fg(Color::White))).left_aligned()
        };
        frame.render_widget(label("  To-do"), rows[1]);
        frame.render_widget(label("  Priority"), rows[4]);

        self.render_input(frame, rows[2]);
        self.render_priority_selector(frame, rows[5]);

        let hints = Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::raw(" Save "),
            Span::styled("[Up/Down]", Style::default().fg(Color::Yellow)),
            Span::raw(" Priority"),
        ]);
        frame.render_widget(
            Paragraph::new(hints).alignment(Alignment::Center),
            rows[7],
        );
    }

    fn render_input(&self, frame: &mut Frame, row: Rect) {
        let input_area = Rect {
            x: row.x + 2,
            width: row.width.saturating_sub(4),
            ..row
        };
        let available_width = input_area.width as usize;

        if self.text.is_empty() {
            let placeholder = Paragraph::new(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ));
            frame.render_widget(placeholder, input_area);
        } else {
            // Scroll the line so the cursor stays visible
            let scroll = self.cursor.saturating_sub(available_width);
            let visible_text: String = self
                .text
                .chars()
                .skip(scroll)
                .take(available_width)
                .collect();
            let input_line = Line::from(Span::styled(
                visible_text,
                Style::default().fg(Color::White),
            ));
            frame.render_widget(Paragraph::new(input_line), input_area);
        }

        let scroll = self.cursor.saturating_sub(available_width);
        let cursor_x = input_area.x + (self.cursor - scroll) as u16;
        if cursor_x < input_area.x + input_area.width {
            frame.set_cursor_position((cursor_x, input_area.y));
        }
    }

    fn render_priority_selector(&self, frame: &mut Frame, row: Rect) {
        let mut spans = vec![Span::raw("  ")];
        for (i, priority) in Priority::all().into_iter().enumerate() {
            let selected = i == self.priority_index;
            let marker = if selected { "(o) " } else { "( ) " };
            let style = if selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!("{marker}{priority}"), style));
            spans.push(Span::raw("   "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(page: &mut AddPage, text: &str) {
        for c in text.chars() {
            page.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_inserts_at_the_cursor() {
        let mut page = AddPage::default();
        type_text(&mut page, "Buy mlk");
        page.handle_key(key(KeyCode::Left));
        page.handle_key(key(KeyCode::Left));
        page.handle_key(key(KeyCode::Char('i')));
        assert_eq!(page.text, "Buy milk");
    }

    #[test]
    fn backspace_and_cursor_stay_in_bounds() {
        let mut page = AddPage::default();
        page.handle_key(key(KeyCode::Backspace));
        page.handle_key(key(KeyCode::Left));
        assert_eq!(page.cursor, 0);

        type_text(&mut page, "ab");
        page.handle_key(key(KeyCode::Right));
        assert_eq!(page.cursor, 2);
        page.handle_key(key(KeyCode::Backspace));
        assert_eq!(page.text, "a");
        assert_eq!(page.cursor, 1);
    }

    #[test]
    fn multibyte_text_edits_at_char_boundaries() {
        let mut page = AddPage::default();
        type_text(&mut page, "할 일 저장");
        assert_eq!(page.text, "할 일 저장");

        // Cursor moves and edits are per char, not per byte
        page.handle_key(key(KeyCode::Left));
        page.handle_key(key(KeyCode::Left));
        page.handle_key(key(KeyCode::Char('새')));
        assert_eq!(page.text, "할 일 새저장");

        page.handle_key(key(KeyCode::Backspace));
        assert_eq!(page.text, "할 일 저장");
        assert_eq!(page.cursor, 4);
    }

    #[test]
    fn multibyte_submit_carries_the_full_text() {
        let mut page = AddPage::default();
        type_text(&mut page, "과제 제출 ✅");
        match page.handle_key(key(KeyCode::Enter)) {
            KeyResult::Intent(Intent::Submit { text, .. }) => {
                assert_eq!(text, "과제 제출 ✅");
            }
            _ => panic!("expected a submit intent"),
        }
    }

    #[test]
    fn priority_cycles_in_display_order() {
        let mut page = AddPage::default();
        assert_eq!(page.priority(), Priority::Low);
        page.handle_key(key(KeyCode::Down));
        assert_eq!(page.priority(), Priority::Normal);
        page.handle_key(key(KeyCode::Down));
        assert_eq!(page.priority(), Priority::High);
        page.handle_key(key(KeyCode::Down));
        assert_eq!(page.priority(), Priority::Low);
        page.handle_key(key(KeyCode::Up));
        assert_eq!(page.priority(), Priority::High);
    }

    #[test]
    fn enter_emits_a_submit_intent_with_the_raw_text() {
        let mut page = AddPage::default();
        type_text(&mut page, "  Buy milk ");
        page.handle_key(key(KeyCode::Down));

        // Trimming and validation belong to the store, not the form
        match page.handle_key(key(KeyCode::Enter)) {
            KeyResult::Intent(Intent::Submit { text, priority }) => {
                assert_eq!(text, "  Buy milk ");
                assert_eq!(priority, Priority::Normal);
            }
            _ => panic!("expected a submit intent"),
        }
    }

    #[test]
    fn reset_clears_the_form() {
        let mut page = AddPage::default();
        type_text(&mut page, "done");
        page.handle_key(key(KeyCode::Down));
        page.reset();
        assert_eq!(page.text, "");
        assert_eq!(page.cursor, 0);
        assert_eq!(page.priority(), Priority::Low);
    }
}
