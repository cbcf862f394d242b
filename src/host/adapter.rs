use serde::{Deserialize, Serialize};

use super::HostError;
use super::note::HostFlags;

/// What the editor hands the host after every accepted mutation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavePayload {
    /// Serialized document (JSON groups or flat checklist text)
    pub text: String,
    pub preview_html: String,
    pub preview_plain: String,
    /// Per-note new-task draft, when the document keeps one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<String>,
}

/// The host note application, seen from the editor
pub trait HostAdapter {
    /// Raw persisted text, delivered once at mount. May be empty or one of
    /// the `"null"` / `"undefined"` sentinels.
    fn load_raw_state(&mut self) -> Result<String, HostError>;

    /// Persist the serialized document and its previews.
    fn save(&mut self, payload: &SavePayload) -> Result<(), HostError>;

    /// Flags the host reports at mount
    fn flags(&self) -> HostFlags {
        HostFlags::default()
    }

    /// Per-note draft kept by the host alongside the text
    fn load_draft(&mut self) -> Result<Option<String>, HostError> {
        Ok(None)
    }
}

/// In-memory host, used by tests and embedders that own persistence
/// themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    pub raw: String,
    pub draft: Option<String>,
    pub flags: HostFlags,
    /// Every payload passed to `save`, oldest first
    pub saves: Vec<SavePayload>,
}

impl MemoryHost {
    pub fn new(raw: impl Into<String>) -> Self {
        MemoryHost {
            raw: raw.into(),
            ..MemoryHost::default()
        }
    }

    pub fn last_save(&self) -> Option<&SavePayload> {
        self.saves.last()
    }
}

impl HostAdapter for MemoryHost {
    fn load_raw_state(&mut self) -> Result<String, HostError> {
        Ok(self.raw.clone())
    }

    fn save(&mut self, payload: &SavePayload) -> Result<(), HostError> {
        self.raw = payload.text.clone();
        self.saves.push(payload.clone());
        Ok(())
    }

    fn flags(&self) -> HostFlags {
        self.flags
    }

    fn load_draft(&mut self) -> Result<Option<String>, HostError> {
        Ok(self.draft.clone())
    }
}
