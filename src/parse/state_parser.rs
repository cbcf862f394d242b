use std::borrow::Cow;

use crate::model::state::TaskListState;
use crate::ops::group_ops::append_tasks;

use super::state_serializer::GroupRecord;

/// Payloads meaning "the host has not delivered content yet"
pub const SENTINELS: [&str; 2] = ["null", "undefined"];

/// Error type for structured payload loading
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("malformed task list payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Load a raw structured payload on top of the current state.
///
/// - `"null"` / `"undefined"`: nothing delivered yet, state unchanged.
/// - `""`: explicitly empty. First time this initializes an empty list;
///   once initialized it is a no-op.
/// - anything else must be a JSON array of groups. It replaces the groups
///   and marks the state initialized. Malformed JSON is an error, never an
///   empty list.
pub fn load_state<'a>(
    state: &'a TaskListState,
    raw: &str,
) -> Result<Cow<'a, TaskListState>, LoadError> {
    if SENTINELS.contains(&raw) {
        tracing::debug!(payload = raw, "sentinel payload, state unchanged");
        return Ok(Cow::Borrowed(state));
    }

    if raw.is_empty() {
        if state.initialized == Some(true) {
            return Ok(Cow::Borrowed(state));
        }
        tracing::info!("empty payload, initializing task list");
        return Ok(Cow::Owned(TaskListState {
            groups: Default::default(),
            initialized: Some(true),
        }));
    }

    let records: Vec<GroupRecord> = serde_json::from_str(raw)?;
    let mut next = TaskListState {
        groups: Default::default(),
        initialized: Some(true),
    };
    for record in records {
        let (name, mut group) = record.into_group();
        let tasks = std::mem::take(&mut group.tasks);
        if next.groups.contains_key(&name) {
            tracing::warn!(group = %name, "duplicate group in payload, folding into first");
        } else {
            next.groups.insert(name.clone(), group);
        }
        // ids repeated inside one record are re-keyed the same way
        if let Some(target) = next.groups.get_mut(&name) {
            append_tasks(target, tasks, &name);
        }
    }
    tracing::info!(groups = next.groups.len(), "task list loaded");
    Ok(Cow::Owned(next))
}
