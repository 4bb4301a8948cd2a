use crate::record::{Priority, Record};
use crate::store::{RecordStore, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    AddTask,
    ListView,
    Settings,
}

impl Page {
    pub const fn all() -> [Page; 3] {
        [Page::AddTask, Page::ListView, Page::Settings]
    }

    pub const fn title(self) -> &'static str {
        match self {
            Page::AddTask => "Add Task",
            Page::ListView => "List",
            Page::Settings => "Settings",
        }
    }

    pub fn from_number(n: u8) -> Option<Page> {
        match n {
            1 => Some(Page::AddTask),
            2 => Some(Page::ListView),
            3 => Some(Page::Settings),
            _ => None,
        }
    }

    pub fn next(self) -> Page {
        match self {
            Page::AddTask => Page::ListView,
            Page::ListView => Page::Settings,
            Page::Settings => Page::AddTask,
        }
    }

    pub fn previous(self) -> Page {
        match self {
            Page::AddTask => Page::Settings,
            Page::ListView => Page::AddTask,
            Page::Settings => Page::ListView,
        }
    }
}

/// One discrete user action. Every key press the pages care about is turned
/// into exactly one intent and dispatched to completion before the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SelectPage(Page),
    Submit { text: String, priority: Priority },
    RemoveLast,
    ClearAll,
}

/// What a dispatched intent produced, for the UI to surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    PageChanged(Page),
    Saved,
    Rejected(ValidationError),
    Removed(Record),
    NothingToRemove,
    Cleared,
}

/// Per-user state: the record store and the selected page. Created empty
/// when the process starts and dropped with it; nothing persists.
#[derive(Debug, Default)]
pub struct Session {
    store: RecordStore,
    page: Page,
}

impl Session {
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
            page: Page::AddTask,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Routes an intent to the store or the page selector. All failures are
    /// handled here and reported as feedback; nothing propagates further.
    pub fn dispatch(&mut self, intent: Intent) -> Feedback {
        match intent {
            Intent::SelectPage(page) => {
                self.page = page;
                Feedback::PageChanged(page)
            }
            Intent::Submit { text, priority } => match self.store.append(&text, priority) {
                Ok(()) => Feedback::Saved,
                Err(err) => Feedback::Rejected(err),
            },
            Intent::RemoveLast => match self.store.remove_last() {
                Some(record) => Feedback::Removed(record),
                None => Feedback::NothingToRemove,
            },
            Intent::ClearAll => {
                self.store.clear();
                Feedback::Cleared
            }
        }
    }
}
