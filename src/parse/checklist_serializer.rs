use crate::model::checklist::Checklist;

/// Serialize the checklist to its line format: one `- [ ] ` / `- [x] `
/// line per item, joined with `\n`, no trailing newline.
pub fn serialize_checklist(list: &Checklist) -> String {
    list.items
        .iter()
        .map(|item| {
            let mark = if item.completed { 'x' } else { ' ' };
            format!("- [{}] {}", mark, item.description)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::checklist::ChecklistItem;
    use crate::parse::checklist_parser::parse_checklist;

    #[test]
    fn test_serialize_items() {
        let mut done = ChecklistItem::new("Call mom");
        done.completed = true;
        let list = Checklist::from_items(vec![ChecklistItem::new("Buy milk"), done]);
        assert_eq!(serialize_checklist(&list), "- [ ] Buy milk\n- [x] Call mom");
    }

    #[test]
    fn test_serialize_empty() {
        assert_eq!(serialize_checklist(&Checklist::new()), "");
    }

    #[test]
    fn test_round_trip_edge_descriptions() {
        let list = Checklist::from_items(vec![
            ChecklistItem::new(""),
            ChecklistItem::new("   "),
            ChecklistItem::new("- [x] looks like a marker"),
            ChecklistItem::new("ünïcødé ✓"),
        ]);
        assert_eq!(parse_checklist(&serialize_checklist(&list)), list);
    }
}
