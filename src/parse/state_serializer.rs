use serde::{Deserialize, Serialize};

use crate::model::group::Group;
use crate::model::state::TaskListState;
use crate::model::task::Task;

/// Persisted shape of one group: `{ name, tasks, collapsed?, draft? }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft: Option<String>,
}

impl GroupRecord {
    pub fn from_group(name: &str, group: &Group) -> Self {
        GroupRecord {
            name: name.to_string(),
            tasks: group.tasks.clone(),
            collapsed: group.collapsed,
            draft: group.draft.clone(),
        }
    }

    pub fn into_group(self) -> (String, Group) {
        (
            self.name,
            Group {
                tasks: self.tasks,
                collapsed: self.collapsed,
                draft: self.draft,
            },
        )
    }
}

/// Serialize the groups as a compact JSON array. The `initialized` marker is
/// in-memory only and is not part of the payload.
pub fn serialize_state(state: &TaskListState) -> String {
    let records: Vec<GroupRecord> = state
        .groups
        .iter()
        .map(|(name, group)| GroupRecord::from_group(name, group))
        .collect();
    // Plain strings/bools/arrays with string keys cannot fail to serialize.
    serde_json::to_string(&records).unwrap_or_else(|_| "[]".to_string())
}
