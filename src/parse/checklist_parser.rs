use std::sync::LazyLock;

use regex::Regex;

use crate::model::checklist::{Checklist, ChecklistItem};

/// `- [ ] text`, `- [x] text`; `*` bullets, `[X]` and leading indent are
/// tolerated on read.
static ITEM_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[-*] \[([ xX])\](?: (.*))?$").expect("valid checklist line pattern")
});

/// Parse the flat checklist text of a note.
///
/// Empty or missing text is an empty list. Blank lines are skipped. A line
/// without a checkbox marker is kept as an open item holding the whole line,
/// so nothing a user typed by hand is dropped.
pub fn parse_checklist(source: &str) -> Checklist {
    let items = source
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(parse_item_line)
        .collect();
    Checklist { items, draft: None }
}

fn parse_item_line(line: &str) -> ChecklistItem {
    match ITEM_LINE.captures(line) {
        Some(caps) => ChecklistItem {
            description: caps.get(2).map_or("", |m| m.as_str()).to_string(),
            completed: caps.get(1).is_some_and(|m| m.as_str() != " "),
        },
        None => ChecklistItem {
            description: line.to_string(),
            completed: false,
        },
    }
}
