use serde::{Deserialize, Serialize};

/// One entry of the flat checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Single-line description
    pub description: String,
    pub completed: bool,
}

impl ChecklistItem {
    /// Create an open item. Line breaks are folded into spaces because each
    /// item occupies exactly one line of the persisted text.
    pub fn new(description: &str) -> Self {
        ChecklistItem {
            description: single_line(description),
            completed: false,
        }
    }
}

/// Fold `\r\n`, `\n` and `\r` into single spaces
pub fn single_line(s: &str) -> String {
    s.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// The visual partition an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Open,
    Completed,
}

impl Section {
    pub fn of(item: &ChecklistItem) -> Section {
        if item.completed {
            Section::Completed
        } else {
            Section::Open
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Open => write!(f, "open"),
            Section::Completed => write!(f, "completed"),
        }
    }
}

/// The legacy, ungrouped task list of a note
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checklist {
    /// Items in persisted document order
    pub items: Vec<ChecklistItem>,
    /// Per-note new-task draft (carried by the note envelope, not the text)
    pub draft: Option<String>,
}

impl Checklist {
    pub fn new() -> Self {
        Checklist::default()
    }

    pub fn from_items(items: Vec<ChecklistItem>) -> Self {
        Checklist { items, draft: None }
    }

    /// Indices into `items` of the entries in `section`, in document order
    pub fn section_indices(&self, section: Section) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| Section::of(item) == section)
            .map(|(i, _)| i)
            .collect()
    }

    /// (completed, total)
    pub fn progress(&self) -> (usize, usize) {
        let completed = self.items.iter().filter(|i| i.completed).count();
        (completed, self.items.len())
    }
}
