use crate::model::checklist::{Checklist, ChecklistItem, Section, single_line};

use super::outcome::{Ignored, Outcome};
use super::reorder::move_item as move_in_sequence;

/// Mutations of the flat checklist. Items are addressed by their position in
/// the single persisted sequence, except for drags, which are
/// section-relative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecklistCommand {
    Add { description: String },
    Modify { index: usize, description: String },
    Toggle { index: usize },
    Delete { index: usize },
    ReopenCompleted,
    DeleteCompleted,
    Move {
        from_section: Section,
        from_index: usize,
        to_section: Section,
        to_index: usize,
    },
    SetDraft { draft: String },
}

impl ChecklistCommand {
    pub fn kind(&self) -> &'static str {
        match self {
            ChecklistCommand::Add { .. } => "add",
            ChecklistCommand::Modify { .. } => "modify",
            ChecklistCommand::Toggle { .. } => "toggle",
            ChecklistCommand::Delete { .. } => "delete",
            ChecklistCommand::ReopenCompleted => "reopen_completed",
            ChecklistCommand::DeleteCompleted => "delete_completed",
            ChecklistCommand::Move { .. } => "move",
            ChecklistCommand::SetDraft { .. } => "set_draft",
        }
    }

    pub fn defers_persist(&self) -> bool {
        matches!(self, ChecklistCommand::Toggle { .. })
    }
}

pub fn apply(list: &mut Checklist, command: ChecklistCommand) -> Outcome {
    let kind = command.kind();
    let outcome = match command {
        ChecklistCommand::Add { description } => add_item(list, &description),
        ChecklistCommand::Modify { index, description } => modify_item(list, index, &description),
        ChecklistCommand::Toggle { index } => toggle_item(list, index),
        ChecklistCommand::Delete { index } => delete_item(list, index),
        ChecklistCommand::ReopenCompleted => reopen_completed(list),
        ChecklistCommand::DeleteCompleted => delete_completed(list),
        ChecklistCommand::Move {
            from_section,
            from_index,
            to_section,
            to_index,
        } => move_item(list, from_section, from_index, to_section, to_index),
        ChecklistCommand::SetDraft { draft } => set_draft(list, draft),
    };

    if let Outcome::Ignored(ref reason) = outcome {
        tracing::debug!(command = kind, %reason, "checklist command ignored");
    }
    outcome
}

/// Add a new open item at the top of the list.
pub fn add_item(list: &mut Checklist, description: &str) -> Outcome {
    if description.is_empty() {
        return Outcome::Ignored(Ignored::EmptyDescription);
    }
    list.items.insert(0, ChecklistItem::new(description));
    Outcome::Applied
}

pub fn modify_item(list: &mut Checklist, index: usize, description: &str) -> Outcome {
    match list.items.get_mut(index) {
        Some(item) => {
            item.description = single_line(description);
            Outcome::Applied
        }
        None => Outcome::Ignored(Ignored::UnknownItem(index)),
    }
}

/// Flip an item. An item that becomes open moves to the top of the
/// sequence; an item that becomes completed keeps its position.
pub fn toggle_item(list: &mut Checklist, index: usize) -> Outcome {
    let Some(item) = list.items.get_mut(index) else {
        return Outcome::Ignored(Ignored::UnknownItem(index));
    };
    item.completed = !item.completed;
    if !item.completed && index > 0 {
        let item = list.items.remove(index);
        list.items.insert(0, item);
    }
    Outcome::Applied
}

pub fn delete_item(list: &mut Checklist, index: usize) -> Outcome {
    if index >= list.items.len() {
        return Outcome::Ignored(Ignored::UnknownItem(index));
    }
    list.items.remove(index);
    Outcome::Applied
}

pub fn reopen_completed(list: &mut Checklist) -> Outcome {
    if !list.items.iter().any(|i| i.completed) {
        return Outcome::Ignored(Ignored::Unchanged);
    }
    for item in &mut list.items {
        item.completed = false;
    }
    Outcome::Applied
}

pub fn delete_completed(list: &mut Checklist) -> Outcome {
    if !list.items.iter().any(|i| i.completed) {
        return Outcome::Ignored(Ignored::Unchanged);
    }
    list.items.retain(|i| !i.completed);
    Outcome::Applied
}

pub fn set_draft(list: &mut Checklist, draft: String) -> Outcome {
    if list.draft.as_deref() == Some(draft.as_str()) {
        return Outcome::Ignored(Ignored::Unchanged);
    }
    list.draft = Some(draft);
    Outcome::Applied
}

/// Open and completed views of the list, each in document order.
pub fn split(list: &Checklist) -> (Vec<&ChecklistItem>, Vec<&ChecklistItem>) {
    list.items.iter().partition(|i| !i.completed)
}

/// Drag an item between (or within) the open and completed views.
///
/// The item lands at `to_index` of the destination view, in front of the
/// item that sits there now. Dropping one past the end of a non-empty view
/// places it right after that view's last item; dropping into an empty view
/// puts it at the front (open) or the end (completed). The item's
/// completion then follows the destination view.
pub fn move_item(
    list: &mut Checklist,
    from_section: Section,
    from_index: usize,
    to_section: Section,
    to_index: usize,
) -> Outcome {
    let from_indices = list.section_indices(from_section);
    let to_indices = list.section_indices(to_section);
    let Some(&src) = from_indices.get(from_index) else {
        return Outcome::Ignored(Ignored::IndexOutOfRange {
            from: from_index,
            to: to_index,
            len: from_indices.len(),
        });
    };

    if from_section == to_section {
        let Some(&dst) = to_indices.get(to_index) else {
            return Outcome::Ignored(Ignored::IndexOutOfRange {
                from: from_index,
                to: to_index,
                len: to_indices.len(),
            });
        };
        return move_in_sequence(&mut list.items, src, dst);
    }

    if to_index > to_indices.len() {
        return Outcome::Ignored(Ignored::IndexOutOfRange {
            from: from_index,
            to: to_index,
            len: to_indices.len(),
        });
    }

    let mut item = list.items.remove(src);
    item.completed = to_section == Section::Completed;

    let insert_at = match (to_indices.get(to_index), to_indices.last()) {
        (Some(&dst), _) if dst > src => dst - 1,
        (Some(&dst), _) => dst,
        (None, Some(&last)) if last > src => last,
        (None, Some(&last)) => last + 1,
        (None, None) => match to_section {
            Section::Open => 0,
            Section::Completed => list.items.len(),
        },
    };
    list.items.insert(insert_at, item);
    Outcome::Applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(description: &str, completed: bool) -> ChecklistItem {
        ChecklistItem {
            description: description.to_string(),
            completed,
        }
    }

    fn sample() -> Checklist {
        Checklist::from_items(vec![
            item("a", false),
            item("b", true),
            item("c", false),
            item("d", true),
        ])
    }

    fn order(list: &Checklist) -> Vec<String> {
        list.items
            .iter()
            .map(|i| format!("{}{}", i.description, if i.completed { "+" } else { "" }))
            .collect()
    }

    #[test]
    fn test_add_front_inserts_open() {
        let mut list = sample();
        assert!(add_item(&mut list, "new").is_applied());
        assert_eq!(order(&list), vec!["new", "a", "b+", "c", "d+"]);
    }

    #[test]
    fn test_add_empty_is_rejected() {
        let mut list = sample();
        assert_eq!(add_item(&mut list, ""), Outcome::Ignored(Ignored::EmptyDescription));
        assert_eq!(list, sample());
    }

    #[test]
    fn test_toggle_to_open_moves_to_top() {
        let mut list = sample();
        toggle_item(&mut list, 3);
        assert_eq!(order(&list), vec!["d", "a", "b+", "c"]);
    }

    #[test]
    fn test_toggle_to_completed_keeps_position() {
        let mut list = sample();
        toggle_item(&mut list, 2);
        assert_eq!(order(&list), vec!["a", "b+", "c+", "d+"]);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut list = sample();
        assert_eq!(toggle_item(&mut list, 9), Outcome::Ignored(Ignored::UnknownItem(9)));
    }

    #[test]
    fn test_modify_folds_newlines() {
        let mut list = sample();
        modify_item(&mut list, 0, "two\nlines");
        assert_eq!(list.items[0].description, "two lines");
        assert!(!list.items[0].completed);
    }

    #[test]
    fn test_bulk_operations() {
        let mut list = sample();
        reopen_completed(&mut list);
        assert_eq!(order(&list), vec!["a", "b", "c", "d"]);

        let mut list = sample();
        delete_completed(&mut list);
        assert_eq!(order(&list), vec!["a", "c"]);
        assert_eq!(delete_completed(&mut list), Outcome::Ignored(Ignored::Unchanged));
        assert_eq!(reopen_completed(&mut list), Outcome::Ignored(Ignored::Unchanged));
        assert_eq!(order(&list), vec!["a", "c"]);
    }

    #[test]
    fn test_split_keeps_document_order() {
        let list = sample();
        let (open, completed) = split(&list);
        assert_eq!(open.iter().map(|i| i.description.as_str()).collect::<Vec<_>>(), vec!["a", "c"]);
        assert_eq!(
            completed.iter().map(|i| i.description.as_str()).collect::<Vec<_>>(),
            vec!["b", "d"]
        );
    }

    #[test]
    fn test_move_within_open_section() {
        let mut list = sample();
        assert!(move_item(&mut list, Section::Open, 1, Section::Open, 0).is_applied());
        assert_eq!(order(&list), vec!["c", "a", "b+", "d+"]);
    }

    #[test]
    fn test_move_open_to_completed_marks_done() {
        let mut list = sample();
        move_item(&mut list, Section::Open, 0, Section::Completed, 1);
        assert_eq!(order(&list), vec!["b+", "c", "a+", "d+"]);
    }

    #[test]
    fn test_move_completed_to_open_end() {
        let mut list = sample();
        move_item(&mut list, Section::Completed, 1, Section::Open, 2);
        assert_eq!(order(&list), vec!["a", "b+", "c", "d"]);
    }

    #[test]
    fn test_move_into_empty_completed_section() {
        let mut list = Checklist::from_items(vec![item("a", false), item("b", false)]);
        move_item(&mut list, Section::Open, 0, Section::Completed, 0);
        assert_eq!(order(&list), vec!["b", "a+"]);
    }

    #[test]
    fn test_move_out_of_range_is_ignored() {
        let mut list = sample();
        assert!(!move_item(&mut list, Section::Open, 5, Section::Open, 0).is_applied());
        assert!(!move_item(&mut list, Section::Open, 0, Section::Completed, 3).is_applied());
        assert_eq!(list, sample());
    }

    #[test]
    fn test_set_draft_via_apply() {
        let mut list = sample();
        apply(&mut list, ChecklistCommand::SetDraft { draft: "wip".into() });
        assert_eq!(list.draft.as_deref(), Some("wip"));
        let again = apply(&mut list, ChecklistCommand::SetDraft { draft: "wip".into() });
        assert_eq!(again, Outcome::Ignored(Ignored::Unchanged));
    }
}
