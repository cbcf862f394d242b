use unicode_segmentation::UnicodeSegmentation;

use crate::model::checklist::Checklist;
use crate::model::config::PreviewConfig;
use crate::model::state::TaskListState;

const EMPTY_PREVIEW: &str = "No tasks";

/// Host-side list previews generated on every save
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Previews {
    pub html: String,
    pub plain: String,
}

// ---------------------------------------------------------------------------
// Flat checklist
// ---------------------------------------------------------------------------

pub fn checklist_previews(list: &Checklist, config: &PreviewConfig) -> Previews {
    Previews {
        html: checklist_html(list, config),
        plain: checklist_plain(list, config),
    }
}

/// `<p>c/t tasks completed</p><ol>…</ol>`, completed items struck through.
pub fn checklist_html(list: &Checklist, config: &PreviewConfig) -> String {
    if list.items.is_empty() {
        return format!("<p>{}</p>", EMPTY_PREVIEW);
    }
    let (completed, total) = list.progress();
    let mut html = format!("<p>{}</p><ol>", completed_line(completed, total));
    for item in list.items.iter().take(config.html_task_limit) {
        let text = escape_html(&item.description);
        if item.completed {
            html.push_str(&format!("<li><s>{}</s></li>", text));
        } else {
            html.push_str(&format!("<li>{}</li>", text));
        }
    }
    html.push_str("</ol>");
    push_more(&mut html, total, config.html_task_limit);
    html
}

pub fn checklist_plain(list: &Checklist, config: &PreviewConfig) -> String {
    if list.items.is_empty() {
        return EMPTY_PREVIEW.to_string();
    }
    let (completed, total) = list.progress();
    let mut plain = completed_line(completed, total);
    let open: Vec<&str> = list
        .items
        .iter()
        .filter(|i| !i.completed)
        .take(config.plain_task_limit)
        .map(|i| i.description.as_str())
        .collect();
    if !open.is_empty() {
        plain.push_str(": ");
        plain.push_str(&open.join(", "));
    }
    truncate_graphemes(&plain, config.plain_max_chars)
}

// ---------------------------------------------------------------------------
// Grouped task list
// ---------------------------------------------------------------------------

pub fn state_previews(state: &TaskListState, config: &PreviewConfig) -> Previews {
    Previews {
        html: state_html(state, config),
        plain: state_plain(state, config),
    }
}

/// `<p>c/t tasks completed</p><ul><li>Group (c/t)</li>…</ul>`
pub fn state_html(state: &TaskListState, config: &PreviewConfig) -> String {
    if state.groups.is_empty() {
        return format!("<p>{}</p>", EMPTY_PREVIEW);
    }
    let (completed, total) = state.progress();
    let mut html = format!("<p>{}</p><ul>", completed_line(completed, total));
    for (name, group) in state.groups.iter().take(config.html_task_limit) {
        let (gc, gt) = group.progress();
        html.push_str(&format!("<li>{} ({}/{})</li>", escape_html(name), gc, gt));
    }
    html.push_str("</ul>");
    push_more(&mut html, state.groups.len(), config.html_task_limit);
    html
}

pub fn state_plain(state: &TaskListState, config: &PreviewConfig) -> String {
    if state.groups.is_empty() {
        return EMPTY_PREVIEW.to_string();
    }
    let (completed, total) = state.progress();
    let count = state.groups.len();
    let plain = format!(
        "{} in {} {}",
        completed_line(completed, total),
        count,
        if count == 1 { "group" } else { "groups" }
    );
    truncate_graphemes(&plain, config.plain_max_chars)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn completed_line(completed: usize, total: usize) -> String {
    format!("{}/{} tasks completed", completed, total)
}

fn push_more(html: &mut String, total: usize, limit: usize) {
    if total > limit {
        html.push_str(&format!("<p>+{} more</p>", total - limit));
    }
}

/// Cut to at most `max` grapheme clusters, ending with `…` when cut.
pub fn truncate_graphemes(s: &str, max: usize) -> String {
    if s.graphemes(true).count() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = s.graphemes(true).take(max - 1).collect();
    out.push('…');
    out
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
