use std::borrow::Cow;

use crate::model::checklist::Checklist;
use crate::model::config::PreviewConfig;
use crate::model::state::TaskListState;
use crate::ops::checklist_ops::{self, ChecklistCommand};
use crate::ops::{self, Command, Outcome};
use crate::parse::{
    LoadError, Previews, checklist_previews, load_state, parse_checklist, serialize_checklist,
    serialize_state, state_previews,
};

/// A persisted list the editor can drive: the grouped task list or the flat
/// checklist.
pub trait Document {
    type Command;

    /// Take the host's raw text. Returns true when the document changed.
    fn load_raw(&mut self, raw: &str) -> Result<bool, LoadError>;

    fn apply(&mut self, command: Self::Command) -> Outcome;

    /// Whether the command's save should wait for the persist timer
    fn defers_persist(command: &Self::Command) -> bool;

    fn serialize(&self) -> String;

    fn previews(&self, config: &PreviewConfig) -> Previews;

    /// Draft stored by the host next to the text, if this document keeps one
    fn draft(&self) -> Option<String> {
        None
    }

    fn set_draft(&mut self, _draft: Option<String>) {}
}

impl Document for TaskListState {
    type Command = Command;

    fn load_raw(&mut self, raw: &str) -> Result<bool, LoadError> {
        let next = load_state(self, raw)?;
        if let Cow::Borrowed(_) = next {
            return Ok(false);
        }
        *self = next.into_owned();
        Ok(true)
    }

    fn apply(&mut self, command: Command) -> Outcome {
        ops::apply(self, command)
    }

    fn defers_persist(command: &Command) -> bool {
        command.defers_persist()
    }

    fn serialize(&self) -> String {
        serialize_state(self)
    }

    fn previews(&self, config: &PreviewConfig) -> Previews {
        state_previews(self, config)
    }
}

impl Document for Checklist {
    type Command = ChecklistCommand;

    /// The flat format has no failure mode: unreadable lines become items.
    fn load_raw(&mut self, raw: &str) -> Result<bool, LoadError> {
        let parsed = parse_checklist(raw);
        if parsed.items == self.items {
            return Ok(false);
        }
        self.items = parsed.items;
        Ok(true)
    }

    fn apply(&mut self, command: ChecklistCommand) -> Outcome {
        checklist_ops::apply(self, command)
    }

    fn defers_persist(command: &ChecklistCommand) -> bool {
        command.defers_persist()
    }

    fn serialize(&self) -> String {
        serialize_checklist(self)
    }

    fn previews(&self, config: &PreviewConfig) -> Previews {
        checklist_previews(self, config)
    }

    fn draft(&self) -> Option<String> {
        self.draft.clone()
    }

    fn set_draft(&mut self, draft: Option<String>) {
        self.draft = draft;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::checklist::ChecklistItem;
    use crate::model::state::LoadPhase;

    #[test]
    fn test_structured_sentinel_leaves_document_alone() {
        let mut state = TaskListState::new();
        assert!(!state.load_raw("undefined").unwrap());
        assert_eq!(state.phase(), LoadPhase::Uninitialized);
        assert!(state.load_raw("").unwrap());
        assert_eq!(state.phase(), LoadPhase::Initialized);
        assert!(!state.load_raw("").unwrap());
    }

    #[test]
    fn test_structured_malformed_is_an_error() {
        let mut state = TaskListState::new();
        assert!(state.load_raw("[{").is_err());
        assert_eq!(state.phase(), LoadPhase::Uninitialized);
    }

    #[test]
    fn test_checklist_load_keeps_draft() {
        let mut list = Checklist::new();
        list.set_draft(Some("typing".into()));
        assert!(list.load_raw("- [ ] a\n- [x] b").unwrap());
        assert_eq!(list.items.len(), 2);
        assert!(list.items[1].completed);
        assert_eq!(list.draft().as_deref(), Some("typing"));
    }

    #[test]
    fn test_checklist_empty_load_is_unchanged() {
        let mut list = Checklist::new();
        assert!(!list.load_raw("").unwrap());
        list.items.push(ChecklistItem::new("x"));
        assert!(list.load_raw("").unwrap());
        assert!(list.items.is_empty());
    }
}
