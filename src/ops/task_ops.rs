use crate::model::group::Group;
use crate::model::state::TaskListState;
use crate::model::task::Task;

use super::outcome::{Ignored, Outcome};
use super::reorder::move_item;

// ---------------------------------------------------------------------------
// Task CRUD
// ---------------------------------------------------------------------------

/// Add a task to the front of a group. The new task is always open.
pub fn add_task(state: &mut TaskListState, group_name: &str, task: Task) -> Outcome {
    if task.description.is_empty() {
        return Outcome::Ignored(Ignored::EmptyDescription);
    }
    let group = match find_group(state, group_name) {
        Ok(g) => g,
        Err(outcome) => return outcome,
    };
    if group.contains_task(&task.id) {
        return Outcome::Ignored(Ignored::DuplicateTask {
            group: group_name.to_string(),
            id: task.id,
        });
    }

    group.tasks.insert(
        0,
        Task {
            completed: false,
            ..task
        },
    );
    Outcome::Applied
}

/// Replace a task's description. Completion is never touched here.
pub fn modify_task(state: &mut TaskListState, group_name: &str, task: Task) -> Outcome {
    let existing = match find_task(state, group_name, &task.id) {
        Ok(t) => t,
        Err(outcome) => return outcome,
    };
    existing.description = task.description;
    Outcome::Applied
}

pub fn toggle_task(state: &mut TaskListState, group_name: &str, id: &str) -> Outcome {
    match find_task(state, group_name, id) {
        Ok(task) => {
            task.toggle();
            Outcome::Applied
        }
        Err(outcome) => outcome,
    }
}

pub fn delete_task(state: &mut TaskListState, group_name: &str, id: &str) -> Outcome {
    let group = match find_group(state, group_name) {
        Ok(g) => g,
        Err(outcome) => return outcome,
    };
    match group.position(id) {
        Some(idx) => {
            group.tasks.remove(idx);
            Outcome::Applied
        }
        None => Outcome::Ignored(unknown_task(group_name, id)),
    }
}

// ---------------------------------------------------------------------------
// Bulk operations
// ---------------------------------------------------------------------------

/// Mark every task of the group open; order is unchanged.
pub fn open_all_completed(state: &mut TaskListState, group_name: &str) -> Outcome {
    let group = match find_group(state, group_name) {
        Ok(g) => g,
        Err(outcome) => return outcome,
    };
    if !group.tasks.iter().any(|t| t.completed) {
        return Outcome::Ignored(Ignored::Unchanged);
    }
    for task in &mut group.tasks {
        task.completed = false;
    }
    Outcome::Applied
}

/// Drop every completed task; the rest keep their relative order.
pub fn delete_all_completed(state: &mut TaskListState, group_name: &str) -> Outcome {
    let group = match find_group(state, group_name) {
        Ok(g) => g,
        Err(outcome) => return outcome,
    };
    if !group.tasks.iter().any(|t| t.completed) {
        return Outcome::Ignored(Ignored::Unchanged);
    }
    group.tasks.retain(|t| !t.completed);
    Outcome::Applied
}

// ---------------------------------------------------------------------------
// Reorder
// ---------------------------------------------------------------------------

/// Move a task inside its group. Only same-section moves touch the order;
/// a drag across the open/completed split is rejected here and any
/// completion change has to come from a separate toggle.
pub fn reorder_tasks(
    state: &mut TaskListState,
    group_name: &str,
    from: usize,
    to: usize,
    same_section: bool,
) -> Outcome {
    let group = match find_group(state, group_name) {
        Ok(g) => g,
        Err(outcome) => return outcome,
    };
    if !same_section {
        return Outcome::Ignored(Ignored::CrossSection);
    }
    move_item(&mut group.tasks, from, to)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn find_group<'a>(state: &'a mut TaskListState, name: &str) -> Result<&'a mut Group, Outcome> {
    state
        .group_mut(name)
        .ok_or_else(|| Outcome::Ignored(Ignored::UnknownGroup(name.to_string())))
}

fn find_task<'a>(
    state: &'a mut TaskListState,
    group_name: &str,
    id: &str,
) -> Result<&'a mut Task, Outcome> {
    find_group(state, group_name)?
        .find_task_mut(id)
        .ok_or_else(|| Outcome::Ignored(unknown_task(group_name, id)))
}

fn unknown_task(group: &str, id: &str) -> Ignored {
    Ignored::UnknownTask {
        group: group.to_string(),
        id: id.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn done(id: &str, description: &str) -> Task {
        Task {
            completed: true,
            ..Task::new(id, description)
        }
    }

    fn sample_state() -> TaskListState {
        TaskListState::from_groups([(
            "Test",
            Group::with_tasks(vec![
                done("some-id", "A simple task"),
                Task::new("another-id", "Another simple task"),
                done("yet-another-id", "Yet another simple task"),
            ]),
        )])
    }

    fn ids(state: &TaskListState, group: &str) -> Vec<String> {
        state.group(group).unwrap().tasks.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_add_task_front_inserts() {
        let mut state = sample_state();
        let outcome = add_task(&mut state, "Test", Task::new("new-id", "Fresh"));
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(ids(&state, "Test")[0], "new-id");
        assert_eq!(ids(&state, "Test").len(), 4);
    }

    #[test]
    fn test_add_task_forces_open() {
        let mut state = sample_state();
        add_task(&mut state, "Test", done("new-id", "Claims done"));
        assert!(!state.group("Test").unwrap().tasks[0].completed);
    }

    #[test]
    fn test_add_task_rejects_empty_description() {
        let mut state = sample_state();
        let before = state.clone();
        let outcome = add_task(&mut state, "Test", Task::new("new-id", ""));
        assert_eq!(outcome, Outcome::Ignored(Ignored::EmptyDescription));
        assert_eq!(state, before);
    }

    #[test]
    fn test_add_task_to_missing_group_is_ignored() {
        let mut state = TaskListState::new();
        let outcome = add_task(&mut state, "Errands", Task::new("t1", "Buy milk"));
        assert_eq!(outcome, Outcome::Ignored(Ignored::UnknownGroup("Errands".into())));
        assert!(state.groups.is_empty());
    }

    #[test]
    fn test_add_task_duplicate_id_is_ignored() {
        let mut state = sample_state();
        let outcome = add_task(&mut state, "Test", Task::new("some-id", "Clash"));
        assert!(matches!(outcome, Outcome::Ignored(Ignored::DuplicateTask { .. })));
        assert_eq!(ids(&state, "Test").len(), 3);
    }

    #[test]
    fn test_modify_keeps_completion() {
        let mut state = sample_state();
        let outcome = modify_task(&mut state, "Test", Task::new("some-id", "Changed"));
        assert!(outcome.is_applied());
        let task = state.group("Test").unwrap().find_task("some-id").unwrap();
        assert_eq!(task.description, "Changed");
        assert!(task.completed);
    }

    #[test]
    fn test_modify_unknown_id_is_ignored() {
        let mut state = sample_state();
        let before = state.clone();
        let outcome = modify_task(&mut state, "Test", Task::new("nope", "x"));
        assert!(!outcome.is_applied());
        assert_eq!(state, before);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut state = sample_state();
        let before = state.clone();
        toggle_task(&mut state, "Test", "another-id");
        assert!(state.group("Test").unwrap().tasks[1].completed);
        toggle_task(&mut state, "Test", "another-id");
        assert_eq!(state, before);
    }

    #[test]
    fn test_delete_task() {
        let mut state = sample_state();
        assert!(delete_task(&mut state, "Test", "some-id").is_applied());
        assert_eq!(ids(&state, "Test"), vec!["another-id", "yet-another-id"]);
        assert!(!delete_task(&mut state, "Test", "some-id").is_applied());
    }

    #[test]
    fn test_open_all_completed_keeps_order() {
        let mut state = sample_state();
        open_all_completed(&mut state, "Test");
        let group = state.group("Test").unwrap();
        assert!(group.tasks.iter().all(|t| !t.completed));
        assert_eq!(ids(&state, "Test"), vec!["some-id", "another-id", "yet-another-id"]);
    }

    #[test]
    fn test_delete_all_completed() {
        let mut state = sample_state();
        delete_all_completed(&mut state, "Test");
        assert_eq!(ids(&state, "Test"), vec!["another-id"]);
    }

    #[test]
    fn test_bulk_ops_without_completed_tasks_are_ignored() {
        let mut state = sample_state();
        open_all_completed(&mut state, "Test");
        let before = state.clone();
        assert_eq!(
            open_all_completed(&mut state, "Test"),
            Outcome::Ignored(Ignored::Unchanged)
        );
        assert_eq!(
            delete_all_completed(&mut state, "Test"),
            Outcome::Ignored(Ignored::Unchanged)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_reorder_same_section() {
        let mut state = sample_state();
        assert!(reorder_tasks(&mut state, "Test", 0, 1, true).is_applied());
        assert_eq!(ids(&state, "Test"), vec!["another-id", "some-id", "yet-another-id"]);
    }

    #[test]
    fn test_reorder_cross_section_is_ignored() {
        let mut state = sample_state();
        let before = state.clone();
        let outcome = reorder_tasks(&mut state, "Test", 0, 1, false);
        assert_eq!(outcome, Outcome::Ignored(Ignored::CrossSection));
        assert_eq!(state, before);
    }

    #[test]
    fn test_reorder_out_of_range_is_ignored() {
        let mut state = sample_state();
        let before = state.clone();
        assert!(!reorder_tasks(&mut state, "Test", 0, 9, true).is_applied());
        assert_eq!(state, before);
    }
}
