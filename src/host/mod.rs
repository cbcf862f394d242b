pub mod adapter;
pub mod document;
pub mod editor;
pub mod note;
pub mod timer;

pub use adapter::{HostAdapter, MemoryHost, SavePayload};
pub use document::Document;
pub use editor::Editor;
pub use note::{HostFlags, NoteContent};
pub use timer::PersistTimer;

use std::path::PathBuf;

use crate::parse::LoadError;

/// Errors crossing the host boundary
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("could not access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid note content: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("note is locked")]
    Locked,
}
