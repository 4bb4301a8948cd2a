/// Priority tag shown next to each record, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Normal,
    High,
}

impl Priority {
    pub const fn all() -> [Priority; 3] {
        [Priority::Low, Priority::Normal, Priority::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Normal => "Normal",
            Priority::High => "High",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single to-do entry. Records are never edited after creation; they are
/// only appended, popped, or cleared with the rest of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub text: String,
    pub priority: Priority,
}

impl Record {
    pub const fn new(text: String, priority: Priority) -> Self {
        Self { text, priority }
    }
}
