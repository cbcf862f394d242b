use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::model::checklist::Section;

#[derive(Parser)]
#[command(name = "tn", about = concat!("tasknote v", env!("CARGO_PKG_VERSION"), " - task lists that live in notes"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Note file to operate on
    #[arg(short = 'f', long = "note", global = true, default_value = "note.json")]
    pub note: PathBuf,

    /// Config file (default: tasknote.toml next to the note)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More logging on stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty note file
    Init,
    /// Show groups and their tasks
    Show,
    /// Show completion statistics
    Stats,
    /// Print the HTML and plain-text previews
    Preview,
    /// Add a task to the top of a group
    Add(AddArgs),
    /// Change a task's description
    Edit(EditArgs),
    /// Toggle a task between open and completed
    Toggle(TaskRefArgs),
    /// Delete a task
    Rm(TaskRefArgs),
    /// Reopen every completed task in a group
    Reopen(GroupArg),
    /// Delete every completed task in a group
    Clear(GroupArg),
    /// Move a task inside its group
    Mv(MvArgs),
    /// Group management
    Group(GroupCmd),
    /// Flat checklist notes
    Checklist(ChecklistCmd),
    /// Lock the note against edits
    Lock,
    /// Unlock the note
    Unlock,
}

#[derive(Args)]
pub struct AddArgs {
    /// Group name
    pub group: String,
    /// Task description
    pub description: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Group name
    pub group: String,
    /// Task ID
    pub id: String,
    /// New description
    pub description: String,
}

#[derive(Args)]
pub struct TaskRefArgs {
    /// Group name
    pub group: String,
    /// Task ID
    pub id: String,
}

#[derive(Args)]
pub struct GroupArg {
    /// Group name
    pub group: String,
}

#[derive(Args)]
pub struct MvArgs {
    /// Group name
    pub group: String,
    /// Current position (0-indexed)
    pub from: usize,
    /// New position (0-indexed)
    pub to: usize,
    /// The drag crosses the open/completed boundary (ignored)
    #[arg(long)]
    pub cross_section: bool,
}

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct GroupCmd {
    #[command(subcommand)]
    pub action: GroupAction,
}

#[derive(Subcommand)]
pub enum GroupAction {
    /// Append a new, empty group
    Add(GroupNameArg),
    /// Delete a group and its tasks
    Rm(GroupNameArg),
    /// Move all tasks of one group into another and drop the first
    Merge(GroupMergeArgs),
    /// Rename a group in place
    Rename(GroupRenameArgs),
    /// Collapse a group
    Collapse(GroupNameArg),
    /// Expand a group
    Expand(GroupNameArg),
    /// Set a group's new-task draft
    Draft(GroupDraftArgs),
    /// Move (reorder) a group
    Mv(PositionArgs),
}

#[derive(Args)]
pub struct GroupNameArg {
    /// Group name
    pub name: String,
}

#[derive(Args)]
pub struct GroupMergeArgs {
    /// Group to merge (removed afterwards)
    pub source: String,
    /// Group receiving the tasks
    pub target: String,
}

#[derive(Args)]
pub struct GroupRenameArgs {
    /// Current name
    pub name: String,
    /// New name
    pub new_name: String,
}

#[derive(Args)]
pub struct GroupDraftArgs {
    /// Group name
    pub name: String,
    /// Draft text
    pub draft: String,
}

#[derive(Args)]
pub struct PositionArgs {
    /// Current position (0-indexed)
    pub from: usize,
    /// New position (0-indexed)
    pub to: usize,
}

// ---------------------------------------------------------------------------
// Checklist
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ChecklistCmd {
    #[command(subcommand)]
    pub action: ChecklistAction,
}

#[derive(Subcommand)]
pub enum ChecklistAction {
    /// Show the checklist with item positions
    Show,
    /// Add an item to the top
    Add(ChecklistAddArgs),
    /// Change an item's description
    Edit(ChecklistEditArgs),
    /// Toggle an item
    Toggle(IndexArg),
    /// Delete an item
    Rm(IndexArg),
    /// Reopen every completed item
    Reopen,
    /// Delete every completed item
    Clear,
    /// Drag an item within or across the open/completed sections
    Mv(ChecklistMvArgs),
}

#[derive(Args)]
pub struct ChecklistAddArgs {
    /// Item description
    pub description: String,
}

#[derive(Args)]
pub struct ChecklistEditArgs {
    /// Item position (0-indexed)
    pub index: usize,
    /// New description
    pub description: String,
}

#[derive(Args)]
pub struct IndexArg {
    /// Item position (0-indexed)
    pub index: usize,
}

#[derive(Args)]
pub struct ChecklistMvArgs {
    /// Section the item is in
    #[arg(value_enum)]
    pub from_section: SectionArg,
    /// Position inside that section (0-indexed)
    pub from_index: usize,
    /// Section to drop into
    #[arg(value_enum)]
    pub to_section: SectionArg,
    /// Position inside the destination section (0-indexed)
    pub to_index: usize,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SectionArg {
    Open,
    Completed,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Open => Section::Open,
            SectionArg::Completed => Section::Completed,
        }
    }
}
