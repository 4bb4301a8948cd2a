use std::sync::mpsc::Receiver;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;

use crate::delay::SubmitDelay;
use crate::pages::{AddPage, KeyResult, ListPage, SettingsPage, Shortcut};
use crate::session::{Feedback, Intent, Page, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Transient status-bar message, replaced by the next one and dropped on
/// page change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub session: Session,
    pub add_page: AddPage,
    pub list_page: ListPage,
    pub settings_page: SettingsPage,
    pub notice: Option<Notice>,
    pub busy: Option<SubmitDelay>,
    pub help_visible: bool,
    asset: Option<Value>,
    asset_rx: Option<Receiver<Option<Value>>>,
}

impl App {
    /// `asset_rx` is the pending decorative-asset fetch, if one was started;
    /// until it yields, the asset is treated as absent.
    pub fn new(asset_rx: Option<Receiver<Option<Value>>>) -> Self {
        Self {
            should_quit: false,
            session: Session::new(),
            add_page: AddPage::default(),
            list_page: ListPage,
            settings_page: SettingsPage,
            notice: None,
            busy: None,
            help_visible: false,
            asset: None,
            asset_rx,
        }
    }

    pub fn asset_loaded(&self) -> bool {
        self.asset.is_some()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // The submit pause is non-cancelable: intents are suspended until it
        // expires, one at a time per session.
        if self.busy.is_some() {
            return;
        }

        if self.help_visible {
            self.help_visible = false;
            return;
        }

        // Global shortcuts first
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.dispatch(Intent::SelectPage(self.session.page().next()));
                return;
            }
            KeyCode::BackTab => {
                self.dispatch(Intent::SelectPage(self.session.page().previous()));
                return;
            }
            _ => {}
        }

        // Pass to the active page
        let result = match self.session.page() {
            Page::AddTask => self.add_page.handle_key(key),
            Page::ListView => self.list_page.handle_key(key),
            Page::Settings => self.settings_page.handle_key(key),
        };

        match result {
            KeyResult::Intent(intent) => self.dispatch(intent),
            KeyResult::Consumed => {}
            // Character shortcuts only reach here from pages that don't
            // take text input
            KeyResult::Ignored => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('?') => self.help_visible = true,
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if let Some(n) = c.to_digit(10) {
                        if let Some(page) = Page::from_number(n as u8) {
                            self.dispatch(Intent::SelectPage(page));
                        }
                    }
                }
                _ => {}
            },
        }
    }

    /// Consumes one intent and turns its feedback into UI state.
    fn dispatch(&mut self, intent: Intent) {
        match self.session.dispatch(intent) {
            Feedback::PageChanged(_) => self.notice = None,
            Feedback::Saved => {
                // Record is stored; the decorative pause plays before the
                // success notice shows.
                self.add_page.reset();
                self.busy = Some(SubmitDelay::start(self.asset_loaded()));
            }
            Feedback::Rejected(err) => {
                self.notice = Some(Notice::new(NoticeKind::Error, err.to_string()));
            }
            Feedback::Removed(record) => {
                self.notice = Some(Notice::new(
                    NoticeKind::Warning,
                    format!("Removed: {} ({})", record.text, record.priority),
                ));
            }
            Feedback::NothingToRemove => {
                self.notice = Some(Notice::new(NoticeKind::Info, "Nothing to remove."));
            }
            Feedback::Cleared => {
                self.notice = Some(Notice::new(NoticeKind::Warning, "All items cleared!"));
            }
        }
    }

    pub fn tick(&mut self) {
        self.poll_asset();

        if let Some(delay) = &mut self.busy {
            if delay.tick() {
                self.busy = None;
                self.notice = Some(Notice::new(
                    NoticeKind::Success,
                    "Saved! Check the List page.",
                ));
            }
        }
    }

    fn poll_asset(&mut self) {
        if let Some(rx) = &self.asset_rx {
            if let Ok(result) = rx.try_recv() {
                self.asset = result;
                self.asset_rx = None;
            }
        }
    }

    pub fn page_shortcuts(&self) -> Vec<Shortcut> {
        match self.session.page() {
            Page::AddTask => self.add_page.shortcuts(),
            Page::ListView => self.list_page.shortcuts(),
            Page::Settings => self.settings_page.shortcuts(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Priority;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_without_fetch() -> App {
        App::new(None)
    }

    fn submit(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
    }

    #[test]
    fn injected_asset_channel_is_polled_on_tick() {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut app = App::new(Some(rx));
        assert!(!app.asset_loaded());

        tx.send(Some(serde_json::json!({"v": "5.5.2"}))).unwrap();
        app.tick();
        assert!(app.asset_loaded());
    }

    #[test]
    fn successful_submit_stores_immediately_and_goes_busy() {
        let mut app = app_without_fetch();
        submit(&mut app, "Buy milk");

        assert_eq!(app.session.store().len(), 1);
        assert!(app.busy.is_some());
        // Success notice waits for the pause to expire
        assert_eq!(app.notice, None);
    }

    #[test]
    fn empty_submit_surfaces_the_validation_error() {
        let mut app = app_without_fetch();
        submit(&mut app, "   ");

        assert!(app.session.store().is_empty());
        assert!(app.busy.is_none());
        let notice = app.notice.clone().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
    }

    #[test]
    fn keys_are_suspended_while_busy() {
        let mut app = app_without_fetch();
        submit(&mut app, "Buy milk");
        assert!(app.busy.is_some());

        // Not even quit gets through until the pause expires
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.should_quit);
    }

    #[test]
    fn tab_cycles_pages_and_drops_the_notice() {
        let mut app = app_without_fetch();
        app.notice = Some(Notice::new(NoticeKind::Info, "stale"));

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.session.page(), Page::ListView);
        assert_eq!(app.notice, None);

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.session.page(), Page::Settings);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.session.page(), Page::AddTask);
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.session.page(), Page::Settings);
    }

    #[test]
    fn digit_shortcuts_jump_to_pages_outside_the_form() {
        let mut app = app_without_fetch();
        app.handle_key(key(KeyCode::Tab)); // leave the text input
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.session.page(), Page::Settings);
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.session.page(), Page::AddTask);
    }

    #[test]
    fn digits_typed_into_the_form_stay_text() {
        let mut app = app_without_fetch();
        submit(&mut app, "call 112");
        assert_eq!(app.session.page(), Page::AddTask);
        assert_eq!(app.session.store().records()[0].text, "call 112");
    }

    #[test]
    fn list_page_delete_and_clear_notices() {
        let mut app = app_without_fetch();
        app.session.dispatch(Intent::Submit {
            text: "one".into(),
            priority: Priority::Normal,
        });
        app.handle_key(key(KeyCode::Tab));

        app.handle_key(key(KeyCode::Char('d')));
        assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::Warning);
        assert!(app.session.store().is_empty());

        app.handle_key(key(KeyCode::Char('d')));
        assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::Info);

        app.handle_key(key(KeyCode::Char('c')));
        assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::Warning);
    }

    #[test]
    fn settings_page_mutates_nothing() {
        let mut app = app_without_fetch();
        app.session.dispatch(Intent::Submit {
            text: "keep".into(),
            priority: Priority::High,
        });
        app.handle_key(key(KeyCode::BackTab)); // AddTask -> Settings

        for code in [
            KeyCode::Enter,
            KeyCode::Char('d'),
            KeyCode::Char('x'),
            KeyCode::Up,
        ] {
            app.handle_key(key(code));
        }
        assert_eq!(app.session.store().len(), 1);
        assert_eq!(app.session.page(), Page::Settings);
    }

    #[test]
    fn help_overlay_toggles_and_any_key_closes_it() {
        let mut app = app_without_fetch();
        app.handle_key(key(KeyCode::Tab)); // list page, '?' is free there
        app.handle_key(key(KeyCode::Char('?')));
        assert!(app.help_visible);

        app.handle_key(key(KeyCode::Char('d')));
        assert!(!app.help_visible);
        // The key that closed the overlay is not also dispatched
        assert_eq!(app.notice, None);
    }
}
