use serde::{Deserialize, Serialize};

use super::HostError;
use super::adapter::SavePayload;

/// Presentation flags reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostFlags {
    /// Editing disabled; enforced at the dispatch boundary
    pub locked: bool,
    pub spellcheck: bool,
    pub mobile: bool,
}

impl Default for HostFlags {
    fn default() -> Self {
        HostFlags {
            locked: false,
            spellcheck: true,
            mobile: false,
        }
    }
}

/// The host's note, parsed once at the adapter edge. Nothing past this type
/// reads untyped host data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteContent {
    /// Persisted document text
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub preview_html: String,
    #[serde(default)]
    pub preview_plain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_draft: Option<String>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default = "default_true")]
    pub spellcheck: bool,
    #[serde(default)]
    pub mobile: bool,
}

impl Default for NoteContent {
    fn default() -> Self {
        NoteContent {
            text: String::new(),
            preview_html: String::new(),
            preview_plain: String::new(),
            task_draft: None,
            locked: false,
            spellcheck: true,
            mobile: false,
        }
    }
}

fn default_true() -> bool {
    true
}

impl NoteContent {
    pub fn from_json(raw: &str) -> Result<Self, HostError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, HostError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn flags(&self) -> HostFlags {
        HostFlags {
            locked: self.locked,
            spellcheck: self.spellcheck,
            mobile: self.mobile,
        }
    }

    /// Fold a save into the note. The draft is only replaced when the
    /// document keeps one.
    pub fn apply_save(&mut self, payload: &SavePayload) {
        self.text = payload.text.clone();
        self.preview_html = payload.preview_html.clone();
        self.preview_plain = payload.preview_plain.clone();
        if payload.draft.is_some() {
            self.task_draft = payload.draft.clone();
        }
    }
}
