use std::fmt;

/// Result of applying a command. Commands never fail: a command that does
/// not apply leaves the state untouched and reports why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(Ignored),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Why a command left the state unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ignored {
    UnknownGroup(String),
    UnknownTask { group: String, id: String },
    UnknownItem(usize),
    EmptyDescription,
    EmptyName,
    DuplicateGroup(String),
    DuplicateTask { group: String, id: String },
    SameGroup(String),
    CrossSection,
    IndexOutOfRange { from: usize, to: usize, len: usize },
    NoMove(usize),
    /// The command would leave everything as it already is
    Unchanged,
    /// Refused at the dispatch boundary while the note is locked
    Locked,
}

impl fmt::Display for Ignored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ignored::UnknownGroup(name) => write!(f, "no group named '{}'", name),
            Ignored::UnknownTask { group, id } => {
                write!(f, "no task '{}' in group '{}'", id, group)
            }
            Ignored::UnknownItem(index) => write!(f, "no item at position {}", index),
            Ignored::EmptyDescription => write!(f, "task description is empty"),
            Ignored::EmptyName => write!(f, "group name is empty"),
            Ignored::DuplicateGroup(name) => write!(f, "group '{}' already exists", name),
            Ignored::DuplicateTask { group, id } => {
                write!(f, "task '{}' already exists in group '{}'", id, group)
            }
            Ignored::SameGroup(name) => write!(f, "'{}' is both source and target", name),
            Ignored::CrossSection => write!(f, "cross-section reorder is not supported"),
            Ignored::IndexOutOfRange { from, to, len } => {
                write!(f, "cannot move {} -> {} in a list of {}", from, to, len)
            }
            Ignored::NoMove(index) => write!(f, "position {} is unchanged", index),
            Ignored::Unchanged => write!(f, "already in that state"),
            Ignored::Locked => write!(f, "note is locked"),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Applied => write!(f, "applied"),
            Outcome::Ignored(reason) => write!(f, "ignored: {}", reason),
        }
    }
}
