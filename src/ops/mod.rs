pub mod checklist_ops;
pub mod command;
pub mod group_ops;
pub mod outcome;
pub mod reorder;
pub mod task_ops;

pub use command::{Command, apply, reduce};
pub use outcome::{Ignored, Outcome};
