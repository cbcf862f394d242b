use serde::Serialize;

use crate::model::checklist::Checklist;
use crate::model::group::Group;
use crate::model::state::TaskListState;
use crate::parse::{GroupRecord, Previews};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ShowJson {
    pub groups: Vec<GroupRecord>,
    pub locked: bool,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub groups: Vec<GroupStatsJson>,
    pub totals: ProgressJson,
}

#[derive(Serialize)]
pub struct GroupStatsJson {
    pub name: String,
    #[serde(flatten)]
    pub progress: ProgressJson,
}

#[derive(Serialize)]
pub struct ProgressJson {
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
}

#[derive(Serialize)]
pub struct PreviewJson {
    pub html: String,
    pub plain: String,
}

#[derive(Serialize)]
pub struct ChecklistJson {
    pub items: Vec<ChecklistItemJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<String>,
}

#[derive(Serialize)]
pub struct ChecklistItemJson {
    pub index: usize,
    pub description: String,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct AddedJson {
    pub group: String,
    pub id: String,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn show_to_json(state: &TaskListState, locked: bool) -> ShowJson {
    ShowJson {
        groups: state
            .groups
            .iter()
            .map(|(name, group)| GroupRecord::from_group(name, group))
            .collect(),
        locked,
    }
}

pub fn stats_to_json(state: &TaskListState) -> StatsJson {
    let (completed, total) = state.progress();
    StatsJson {
        groups: state
            .groups
            .iter()
            .map(|(name, group)| GroupStatsJson {
                name: name.clone(),
                progress: group_progress(group),
            })
            .collect(),
        totals: ProgressJson {
            completed,
            total,
            percentage: state.percentage(),
        },
    }
}

fn group_progress(group: &Group) -> ProgressJson {
    let (completed, total) = group.progress();
    ProgressJson {
        completed,
        total,
        percentage: group.percentage(),
    }
}

pub fn preview_to_json(previews: Previews) -> PreviewJson {
    PreviewJson {
        html: previews.html,
        plain: previews.plain,
    }
}

pub fn checklist_to_json(list: &Checklist) -> ChecklistJson {
    ChecklistJson {
        items: list
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| ChecklistItemJson {
                index,
                description: item.description.clone(),
                completed: item.completed,
            })
            .collect(),
        draft: list.draft.clone(),
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

fn checkbox(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

/// One header line per group, then its tasks with their ids.
pub fn format_state(state: &TaskListState) -> String {
    if state.groups.is_empty() {
        return "No groups".to_string();
    }
    let mut lines = Vec::new();
    for (name, group) in &state.groups {
        let (completed, total) = group.progress();
        let mut header = format!("{} ({}/{})", name, completed, total);
        if group.is_collapsed() {
            header.push_str(" [collapsed]");
        }
        lines.push(header);
        for task in &group.tasks {
            lines.push(format!(
                "  {} {}  {}",
                checkbox(task.completed),
                task.id,
                task.description
            ));
        }
        if let Some(draft) = group.draft.as_deref().filter(|d| !d.is_empty()) {
            lines.push(format!("  draft: {}", draft));
        }
    }
    lines.join("\n")
}

pub fn format_stats(state: &TaskListState) -> String {
    let mut lines = Vec::new();
    let width = state.groups.keys().map(|n| n.chars().count()).max().unwrap_or(0);
    for (name, group) in &state.groups {
        let (completed, total) = group.progress();
        lines.push(format!(
            "{:<width$}  {}/{}  {:>3}%",
            name,
            completed,
            total,
            group.percentage(),
            width = width
        ));
    }
    let (completed, total) = state.progress();
    lines.push(format!(
        "total: {}/{} tasks completed ({}%)",
        completed,
        total,
        state.percentage()
    ));
    lines.join("\n")
}

pub fn format_checklist(list: &Checklist) -> String {
    if list.items.is_empty() {
        return "No tasks".to_string();
    }
    list.items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{:>3} {} {}", i, checkbox(item.completed), item.description))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::checklist::ChecklistItem;
    use crate::model::task::Task;
    use pretty_assertions::assert_eq;

    fn sample() -> TaskListState {
        let mut errands = Group::with_tasks(vec![
            Task::new("t1", "Buy milk"),
            Task {
                completed: true,
                ..Task::new("t2", "Post letter")
            },
        ]);
        errands.draft = Some("Call".into());
        let mut work = Group::new();
        work.collapsed = Some(true);
        TaskListState::from_groups([("Errands", errands), ("Work", work)])
    }

    #[test]
    fn format_state_lists_groups_and_tasks() {
        assert_eq!(
            format_state(&sample()),
            "Errands (1/2)\n  [ ] t1  Buy milk\n  [x] t2  Post letter\n  draft: Call\nWork (0/0) [collapsed]"
        );
        assert_eq!(format_state(&TaskListState::new()), "No groups");
    }

    #[test]
    fn format_stats_totals() {
        assert_eq!(
            format_stats(&sample()),
            "Errands  1/2   50%\nWork     0/0    0%\ntotal: 1/2 tasks completed (50%)"
        );
    }

    #[test]
    fn stats_json_shape() {
        let json = serde_json::to_value(stats_to_json(&sample())).unwrap();
        assert_eq!(json["groups"][0]["name"], "Errands");
        assert_eq!(json["groups"][0]["completed"], 1);
        assert_eq!(json["totals"]["percentage"], 50);
    }

    #[test]
    fn format_checklist_shows_positions() {
        let list = Checklist::from_items(vec![
            ChecklistItem::new("a"),
            ChecklistItem {
                completed: true,
                ..ChecklistItem::new("b")
            },
        ]);
        assert_eq!(format_checklist(&list), "  0 [ ] a\n  1 [x] b");
    }
}
