pub mod config_io;
pub mod note_io;
