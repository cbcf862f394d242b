use std::time::{Duration, Instant};

use crate::model::config::EditorConfig;
use crate::ops::{Ignored, Outcome};

use super::HostError;
use super::adapter::{HostAdapter, SavePayload};
use super::document::Document;
use super::note::HostFlags;
use super::timer::PersistTimer;

/// One mounted note: a document, the host it persists to, and the host's
/// presentation flags.
///
/// Every applied command is saved right away, except toggles, which arm the
/// persist timer so the check animation can finish first. The owner drives
/// the timer through [`Editor::tick`] and [`Editor::flush`].
#[derive(Debug)]
pub struct Editor<D: Document, H: HostAdapter> {
    document: D,
    host: H,
    config: EditorConfig,
    flags: HostFlags,
    timer: PersistTimer,
}

impl<D: Document, H: HostAdapter> Editor<D, H> {
    pub fn new(document: D, host: H, config: EditorConfig) -> Self {
        let timer = PersistTimer::new(Duration::from_millis(config.toggle_delay_ms));
        Editor {
            document,
            host,
            config,
            flags: HostFlags::default(),
            timer,
        }
    }

    /// Pull the raw text, draft and flags from the host. A malformed
    /// structured payload fails the mount and leaves the document as it was.
    pub fn mount(&mut self) -> Result<(), HostError> {
        let raw = self.host.load_raw_state()?;
        let changed = self.document.load_raw(&raw)?;
        let draft = self.host.load_draft()?;
        if draft.is_some() {
            self.document.set_draft(draft);
        }
        self.flags = self.host.flags();
        tracing::info!(changed, locked = self.flags.locked, "note mounted");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Host flag events
    // -----------------------------------------------------------------------

    pub fn on_lock_changed(&mut self, locked: bool) {
        self.flags.locked = locked;
    }

    pub fn on_spellcheck_changed(&mut self, spellcheck: bool) {
        self.flags.spellcheck = spellcheck;
    }

    pub fn on_mobile_flag_changed(&mut self, mobile: bool) {
        self.flags.mobile = mobile;
    }

    pub fn flags(&self) -> HostFlags {
        self.flags
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    pub fn dispatch(&mut self, command: D::Command) -> Result<Outcome, HostError> {
        self.dispatch_at(command, Instant::now())
    }

    /// Apply a command as of `now`. The document is updated before the save
    /// is attempted, so a save error never rolls the mutation back.
    pub fn dispatch_at(&mut self, command: D::Command, now: Instant) -> Result<Outcome, HostError> {
        if self.flags.locked {
            tracing::debug!("note is locked, command ignored");
            return Ok(Outcome::Ignored(Ignored::Locked));
        }

        let defers = D::defers_persist(&command);
        let outcome = self.document.apply(command);
        if outcome.is_applied() {
            if defers {
                self.timer.schedule(now);
            } else {
                self.persist()?;
            }
        }
        Ok(outcome)
    }

    /// Fire the deferred persist if it is due. Returns true if it saved.
    pub fn tick(&mut self, now: Instant) -> Result<bool, HostError> {
        if self.timer.take_due(now) {
            self.persist()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Save now if a deferred persist is pending.
    pub fn flush(&mut self) -> Result<bool, HostError> {
        if !self.timer.is_pending() {
            return Ok(false);
        }
        self.timer.cancel();
        self.persist()?;
        Ok(true)
    }

    pub fn timer_mut(&mut self) -> &mut PersistTimer {
        &mut self.timer
    }

    pub fn has_pending_persist(&self) -> bool {
        self.timer.is_pending()
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Serialized text plus previews for the current document
    pub fn payload(&self) -> SavePayload {
        let previews = self.document.previews(&self.config.preview);
        SavePayload {
            text: self.document.serialize(),
            preview_html: previews.html,
            preview_plain: previews.plain,
            draft: self.document.draft(),
        }
    }

    fn persist(&mut self) -> Result<(), HostError> {
        let payload = self.payload();
        tracing::debug!(bytes = payload.text.len(), "persisting note");
        self.host.save(&payload)
    }
}
