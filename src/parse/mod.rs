pub mod checklist_parser;
pub mod checklist_serializer;
pub mod preview;
pub mod state_parser;
pub mod state_serializer;

pub use checklist_parser::parse_checklist;
pub use checklist_serializer::serialize_checklist;
pub use preview::{Previews, checklist_previews, state_previews};
pub use state_parser::{LoadError, load_state};
pub use state_serializer::{GroupRecord, serialize_state};
