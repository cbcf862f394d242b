use crate::model::group::Group;
use crate::model::state::TaskListState;
use crate::model::task::Task;

use super::outcome::{Ignored, Outcome};
use super::reorder::move_entry;

/// Append an empty group. Adding a name that already exists is a no-op.
pub fn add_group(state: &mut TaskListState, name: &str) -> Outcome {
    if name.is_empty() {
        return Outcome::Ignored(Ignored::EmptyName);
    }
    if state.groups.contains_key(name) {
        return Outcome::Ignored(Ignored::DuplicateGroup(name.to_string()));
    }
    state.groups.insert(name.to_string(), Group::new());
    Outcome::Applied
}

pub fn delete_group(state: &mut TaskListState, name: &str) -> Outcome {
    match state.groups.shift_remove(name) {
        Some(_) => Outcome::Applied,
        None => Outcome::Ignored(Ignored::UnknownGroup(name.to_string())),
    }
}

/// Fold `source` into `target`: target's tasks keep the front, source's
/// tasks follow in their original order, then `source` disappears.
pub fn merge_group(state: &mut TaskListState, source: &str, target: &str) -> Outcome {
    if source == target {
        return Outcome::Ignored(Ignored::SameGroup(source.to_string()));
    }
    for name in [source, target] {
        if !state.groups.contains_key(name) {
            return Outcome::Ignored(Ignored::UnknownGroup(name.to_string()));
        }
    }

    let Some(removed) = state.groups.shift_remove(source) else {
        return Outcome::Ignored(Ignored::UnknownGroup(source.to_string()));
    };
    let Some(into) = state.groups.get_mut(target) else {
        return Outcome::Ignored(Ignored::UnknownGroup(target.to_string()));
    };
    append_tasks(into, removed.tasks, target);
    Outcome::Applied
}

/// Rename a group in place, keeping its position, tasks and flags.
/// Renaming onto an existing name is refused; that is what merge is for.
pub fn rename_group(state: &mut TaskListState, name: &str, new_name: &str) -> Outcome {
    if new_name.is_empty() {
        return Outcome::Ignored(Ignored::EmptyName);
    }
    if name == new_name {
        return Outcome::Ignored(Ignored::SameGroup(name.to_string()));
    }
    if state.groups.contains_key(new_name) {
        return Outcome::Ignored(Ignored::DuplicateGroup(new_name.to_string()));
    }
    let Some((idx, _, group)) = state.groups.shift_remove_full(name) else {
        return Outcome::Ignored(Ignored::UnknownGroup(name.to_string()));
    };
    let (last, _) = state.groups.insert_full(new_name.to_string(), group);
    state.groups.move_index(last, idx);
    Outcome::Applied
}

pub fn collapse_group(state: &mut TaskListState, name: &str, collapsed: bool) -> Outcome {
    match state.group_mut(name) {
        Some(group) if group.collapsed == Some(collapsed) => {
            Outcome::Ignored(Ignored::Unchanged)
        }
        Some(group) => {
            group.collapsed = Some(collapsed);
            Outcome::Applied
        }
        None => Outcome::Ignored(Ignored::UnknownGroup(name.to_string())),
    }
}

pub fn draft_group(state: &mut TaskListState, name: &str, draft: String) -> Outcome {
    match state.group_mut(name) {
        Some(group) if group.draft.as_deref() == Some(draft.as_str()) => {
            Outcome::Ignored(Ignored::Unchanged)
        }
        Some(group) => {
            group.draft = Some(draft);
            Outcome::Applied
        }
        None => Outcome::Ignored(Ignored::UnknownGroup(name.to_string())),
    }
}

pub fn reorder_groups(state: &mut TaskListState, from: usize, to: usize) -> Outcome {
    move_entry(&mut state.groups, from, to)
}

/// Append tasks to a group, re-keying any id that is already taken there.
pub(crate) fn append_tasks(into: &mut Group, tasks: Vec<Task>, group_name: &str) {
    for mut task in tasks {
        if into.contains_task(&task.id) {
            let fresh = free_id(into, &task.id);
            tracing::warn!(
                group = group_name,
                id = %task.id,
                new_id = %fresh,
                "task id already present, appending under a new id"
            );
            task.id = fresh;
        }
        into.tasks.push(task);
    }
}

fn free_id(group: &Group, id: &str) -> String {
    let mut n = 2usize;
    loop {
        let candidate = format!("{}-{}", id, n);
        if !group.contains_task(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
