use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::model::state::TaskListState;
use crate::model::task::Task;

use super::group_ops;
use super::outcome::Outcome;
use super::task_ops;

/// Every mutation the grouped task list understands. Task-scoped commands
/// address a task by owning group name plus id; only the two reorder
/// commands are positional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    AddTask { group: String, task: Task },
    ModifyTask { group: String, task: Task },
    ToggleTask { group: String, id: String },
    DeleteTask { group: String, id: String },
    OpenAllCompleted { group: String },
    DeleteAllCompleted { group: String },
    AddGroup { name: String },
    DeleteGroup { name: String },
    MergeGroup { source: String, target: String },
    RenameGroup { name: String, new_name: String },
    CollapseGroup { name: String, collapsed: bool },
    DraftGroup { name: String, draft: String },
    ReorderTasks {
        group: String,
        from: usize,
        to: usize,
        same_section: bool,
    },
    ReorderGroups { from: usize, to: usize },
}

impl Command {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Command::AddTask { .. } => "add_task",
            Command::ModifyTask { .. } => "modify_task",
            Command::ToggleTask { .. } => "toggle_task",
            Command::DeleteTask { .. } => "delete_task",
            Command::OpenAllCompleted { .. } => "open_all_completed",
            Command::DeleteAllCompleted { .. } => "delete_all_completed",
            Command::AddGroup { .. } => "add_group",
            Command::DeleteGroup { .. } => "delete_group",
            Command::MergeGroup { .. } => "merge_group",
            Command::RenameGroup { .. } => "rename_group",
            Command::CollapseGroup { .. } => "collapse_group",
            Command::DraftGroup { .. } => "draft_group",
            Command::ReorderTasks { .. } => "reorder_tasks",
            Command::ReorderGroups { .. } => "reorder_groups",
        }
    }

    /// Toggles persist after a short visual delay instead of immediately
    pub fn defers_persist(&self) -> bool {
        matches!(self, Command::ToggleTask { .. })
    }
}

/// Apply a command in place.
pub fn apply(state: &mut TaskListState, command: Command) -> Outcome {
    let kind = command.kind();
    let outcome = match command {
        Command::AddTask { group, task } => task_ops::add_task(state, &group, task),
        Command::ModifyTask { group, task } => task_ops::modify_task(state, &group, task),
        Command::ToggleTask { group, id } => task_ops::toggle_task(state, &group, &id),
        Command::DeleteTask { group, id } => task_ops::delete_task(state, &group, &id),
        Command::OpenAllCompleted { group } => task_ops::open_all_completed(state, &group),
        Command::DeleteAllCompleted { group } => task_ops::delete_all_completed(state, &group),
        Command::AddGroup { name } => group_ops::add_group(state, &name),
        Command::DeleteGroup { name } => group_ops::delete_group(state, &name),
        Command::MergeGroup { source, target } => group_ops::merge_group(state, &source, &target),
        Command::RenameGroup { name, new_name } => {
            group_ops::rename_group(state, &name, &new_name)
        }
        Command::CollapseGroup { name, collapsed } => {
            group_ops::collapse_group(state, &name, collapsed)
        }
        Command::DraftGroup { name, draft } => group_ops::draft_group(state, &name, draft),
        Command::ReorderTasks {
            group,
            from,
            to,
            same_section,
        } => task_ops::reorder_tasks(state, &group, from, to, same_section),
        Command::ReorderGroups { from, to } => group_ops::reorder_groups(state, from, to),
    };

    if let Outcome::Ignored(ref reason) = outcome {
        tracing::debug!(command = kind, %reason, "command ignored");
    }
    outcome
}

/// Pure form of [`apply`]: returns the original reference when the command
/// does not apply, and a new snapshot otherwise.
pub fn reduce(state: &TaskListState, command: Command) -> Cow<'_, TaskListState> {
    let mut next = state.clone();
    match apply(&mut next, command) {
        Outcome::Applied => Cow::Owned(next),
        Outcome::Ignored(_) => Cow::Borrowed(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::group::Group;
    use pretty_assertions::assert_eq;

    fn state() -> TaskListState {
        TaskListState::from_groups([("Errands", Group::with_tasks(vec![Task::new("a", "x")]))])
    }

    #[test]
    fn test_reduce_borrows_on_ignored() {
        let s = state();
        let next = reduce(
            &s,
            Command::DeleteTask {
                group: "Errands".into(),
                id: "missing".into(),
            },
        );
        assert!(matches!(next, Cow::Borrowed(_)));
        assert!(std::ptr::eq(next.as_ref(), &s));
    }

    #[test]
    fn test_reduce_borrows_when_nothing_to_reopen() {
        let s = state();
        let next = reduce(
            &s,
            Command::OpenAllCompleted {
                group: "Errands".into(),
            },
        );
        assert!(std::ptr::eq(next.as_ref(), &s));
    }

    #[test]
    fn test_reduce_owns_on_applied() {
        let s = state();
        let next = reduce(
            &s,
            Command::ToggleTask {
                group: "Errands".into(),
                id: "a".into(),
            },
        );
        assert!(matches!(next, Cow::Owned(_)));
        assert!(next.group("Errands").unwrap().tasks[0].completed);
        assert!(!s.group("Errands").unwrap().tasks[0].completed);
    }

    #[test]
    fn test_add_task_on_missing_group_leaves_empty_state() {
        let s = TaskListState::new();
        let next = reduce(
            &s,
            Command::AddTask {
                group: "Errands".into(),
                task: Task::new("t1", "Buy milk"),
            },
        );
        assert!(next.groups.is_empty());
    }

    #[test]
    fn test_command_json_shape() {
        let cmd: Command = serde_json::from_str(
            r#"{"type":"reorder_tasks","group":"Errands","from":0,"to":1,"same_section":true}"#,
        )
        .unwrap();
        assert_eq!(
            cmd,
            Command::ReorderTasks {
                group: "Errands".into(),
                from: 0,
                to: 1,
                same_section: true,
            }
        );
    }

    #[test]
    fn test_only_toggle_defers_persist() {
        let toggle = Command::ToggleTask {
            group: "g".into(),
            id: "a".into(),
        };
        let delete = Command::DeleteTask {
            group: "g".into(),
            id: "a".into(),
        };
        assert!(toggle.defers_persist());
        assert!(!delete.defers_persist());
    }
}
