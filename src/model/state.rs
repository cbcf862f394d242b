use indexmap::IndexMap;

use super::group::Group;
use super::task::percentage;

/// Whether a note has ever received a real payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// No payload delivered yet (or only sentinels)
    Uninitialized,
    /// A real or explicitly empty payload has been loaded
    Initialized,
}

/// The grouped task list: ordered groups keyed by unique name.
#[derive(Debug, Clone, Default)]
pub struct TaskListState {
    /// Groups in user-controlled order
    pub groups: IndexMap<String, Group>,
    /// Set once the first real or explicit-empty payload was loaded
    pub initialized: Option<bool>,
}

impl TaskListState {
    pub fn new() -> Self {
        TaskListState::default()
    }

    /// Build a state from `(name, group)` pairs. Later duplicates replace
    /// earlier ones, so callers that need folding go through the loader.
    pub fn from_groups<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = (S, Group)>,
        S: Into<String>,
    {
        TaskListState {
            groups: groups.into_iter().map(|(n, g)| (n.into(), g)).collect(),
            initialized: None,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        if self.initialized == Some(true) {
            LoadPhase::Initialized
        } else {
            LoadPhase::Uninitialized
        }
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    pub fn group_mut(&mut self, name: &str) -> Option<&mut Group> {
        self.groups.get_mut(name)
    }

    pub fn group_names(&self) -> Vec<&str> {
        self.groups.keys().map(|k| k.as_str()).collect()
    }

    /// (completed, total) across all groups
    pub fn progress(&self) -> (usize, usize) {
        self.groups.values().fold((0, 0), |(c, t), g| {
            let (gc, gt) = g.progress();
            (c + gc, t + gt)
        })
    }

    pub fn percentage(&self) -> u8 {
        let (completed, total) = self.progress();
        percentage(completed, total)
    }
}

// IndexMap equality ignores order; group order is user-visible, so compare
// the sequences.
impl PartialEq for TaskListState {
    fn eq(&self, other: &Self) -> bool {
        self.initialized == other.initialized
            && self.groups.len() == other.groups.len()
            && self.groups.iter().eq(other.groups.iter())
    }
}

impl Eq for TaskListState {}
