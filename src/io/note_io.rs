use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::host::{HostAdapter, HostError, HostFlags, NoteContent, SavePayload};

/// A note stored as a `NoteContent` JSON file. Acts as the host for the CLI.
#[derive(Debug, Clone)]
pub struct FileHost {
    path: PathBuf,
    note: NoteContent,
}

impl FileHost {
    pub fn open(path: &Path) -> Result<Self, HostError> {
        let note = read_note(path)?;
        Ok(FileHost {
            path: path.to_path_buf(),
            note,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn note(&self) -> &NoteContent {
        &self.note
    }

    /// Flip the lock flag and write the note. Lock changes are the one write
    /// a locked note accepts.
    pub fn set_locked(&mut self, locked: bool) -> Result<(), HostError> {
        self.note.locked = locked;
        write_note(&self.path, &self.note)
    }
}

impl HostAdapter for FileHost {
    fn load_raw_state(&mut self) -> Result<String, HostError> {
        Ok(self.note.text.clone())
    }

    fn save(&mut self, payload: &SavePayload) -> Result<(), HostError> {
        if self.note.locked {
            return Err(HostError::Locked);
        }
        self.note.apply_save(payload);
        write_note(&self.path, &self.note)?;
        tracing::debug!(path = %self.path.display(), "note saved");
        Ok(())
    }

    fn flags(&self) -> HostFlags {
        self.note.flags()
    }

    fn load_draft(&mut self) -> Result<Option<String>, HostError> {
        Ok(self.note.task_draft.clone())
    }
}

// ---------------------------------------------------------------------------
// Note files
// ---------------------------------------------------------------------------

pub fn read_note(path: &Path) -> Result<NoteContent, HostError> {
    let text = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    NoteContent::from_json(&text)
}

pub fn write_note(path: &Path, note: &NoteContent) -> Result<(), HostError> {
    let mut json = note.to_json()?;
    json.push('\n');
    atomic_write(path, json.as_bytes()).map_err(|e| io_error(path, e))
}

/// Create a new, empty note. Refuses to overwrite an existing file.
pub fn create_note(path: &Path) -> Result<NoteContent, HostError> {
    if path.exists() {
        return Err(io_error(
            path,
            io::Error::new(io::ErrorKind::AlreadyExists, "note already exists"),
        ));
    }
    let note = NoteContent::default();
    write_note(path, &note)?;
    tracing::info!(path = %path.display(), "created note");
    Ok(note)
}

/// Write via a temp file in the same directory, then rename over the target.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn io_error(path: &Path, source: io::Error) -> HostError {
    HostError::Io {
        path: path.to_path_buf(),
        source,
    }
}
