use std::error::Error;
use std::path::PathBuf;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::host::{Document, Editor, HostAdapter, HostError};
use crate::io::config_io::{self, default_config_path};
use crate::io::note_io::{self, FileHost};
use crate::model::checklist::Checklist;
use crate::model::config::EditorConfig;
use crate::model::state::TaskListState;
use crate::model::task::Task;
use crate::ops::checklist_ops::ChecklistCommand;
use crate::ops::{Command, Outcome};

type CliResult = Result<(), Box<dyn Error>>;

/// Global flags every handler needs
struct Context {
    note: PathBuf,
    config: Option<PathBuf>,
    json: bool,
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CliResult {
    let ctx = Context {
        note: cli.note,
        config: cli.config,
        json: cli.json,
    };

    match cli.command {
        Commands::Init => cmd_init(&ctx),

        // Read commands
        Commands::Show => cmd_show(&ctx),
        Commands::Stats => cmd_stats(&ctx),
        Commands::Preview => cmd_preview(&ctx),

        // Write commands
        Commands::Add(args) => cmd_add(&ctx, args),
        Commands::Edit(args) => write_tasks(
            &ctx,
            Command::ModifyTask {
                group: args.group,
                task: Task::new(args.id, args.description),
            },
        ),
        Commands::Toggle(args) => write_tasks(
            &ctx,
            Command::ToggleTask {
                group: args.group,
                id: args.id,
            },
        ),
        Commands::Rm(args) => write_tasks(
            &ctx,
            Command::DeleteTask {
                group: args.group,
                id: args.id,
            },
        ),
        Commands::Reopen(args) => {
            write_tasks(&ctx, Command::OpenAllCompleted { group: args.group })
        }
        Commands::Clear(args) => {
            write_tasks(&ctx, Command::DeleteAllCompleted { group: args.group })
        }
        Commands::Mv(args) => write_tasks(
            &ctx,
            Command::ReorderTasks {
                group: args.group,
                from: args.from,
                to: args.to,
                same_section: !args.cross_section,
            },
        ),

        Commands::Group(cmd) => write_tasks(&ctx, group_command(cmd.action)),
        Commands::Checklist(cmd) => cmd_checklist(&ctx, cmd.action),

        // Host flags
        Commands::Lock => cmd_set_locked(&ctx, true),
        Commands::Unlock => cmd_set_locked(&ctx, false),
    }
}

fn group_command(action: GroupAction) -> Command {
    match action {
        GroupAction::Add(args) => Command::AddGroup { name: args.name },
        GroupAction::Rm(args) => Command::DeleteGroup { name: args.name },
        GroupAction::Merge(args) => Command::MergeGroup {
            source: args.source,
            target: args.target,
        },
        GroupAction::Rename(args) => Command::RenameGroup {
            name: args.name,
            new_name: args.new_name,
        },
        GroupAction::Collapse(args) => Command::CollapseGroup {
            name: args.name,
            collapsed: true,
        },
        GroupAction::Expand(args) => Command::CollapseGroup {
            name: args.name,
            collapsed: false,
        },
        GroupAction::Draft(args) => Command::DraftGroup {
            name: args.name,
            draft: args.draft,
        },
        GroupAction::Mv(args) => Command::ReorderGroups {
            from: args.from,
            to: args.to,
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_config(ctx: &Context) -> Result<EditorConfig, config_io::ConfigError> {
    let path = match &ctx.config {
        Some(path) => path.clone(),
        None => default_config_path(&ctx.note),
    };
    config_io::read_config(&path)
}

fn open_editor<D: Document + Default>(
    ctx: &Context,
) -> Result<Editor<D, FileHost>, Box<dyn Error>> {
    let host = FileHost::open(&ctx.note)?;
    let config = load_config(ctx)?;
    let mut editor = Editor::new(D::default(), host, config);
    editor.mount()?;
    Ok(editor)
}

/// Apply one command to the note and write it back. A locked note is
/// refused before anything is applied; a command that changes nothing is
/// reported as an error.
fn run_write<D: Document + Default>(ctx: &Context, command: D::Command) -> CliResult {
    let mut editor = open_editor::<D>(ctx)?;
    if editor.flags().locked {
        return Err(HostError::Locked.into());
    }
    let outcome = editor.dispatch(command)?;
    editor.flush()?;
    match outcome {
        Outcome::Applied => Ok(()),
        Outcome::Ignored(reason) => Err(format!("nothing changed: {}", reason).into()),
    }
}

fn write_tasks(ctx: &Context, command: Command) -> CliResult {
    run_write::<TaskListState>(ctx, command)
}

fn print_json<T: serde::Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_init(ctx: &Context) -> CliResult {
    note_io::create_note(&ctx.note)?;
    if !ctx.json {
        println!("Created {}", ctx.note.display());
    }
    Ok(())
}

fn cmd_show(ctx: &Context) -> CliResult {
    let editor = open_editor::<TaskListState>(ctx)?;
    if ctx.json {
        return print_json(&show_to_json(editor.document(), editor.flags().locked));
    }
    println!("{}", format_state(editor.document()));
    Ok(())
}

fn cmd_stats(ctx: &Context) -> CliResult {
    let editor = open_editor::<TaskListState>(ctx)?;
    if ctx.json {
        return print_json(&stats_to_json(editor.document()));
    }
    println!("{}", format_stats(editor.document()));
    Ok(())
}

fn cmd_preview(ctx: &Context) -> CliResult {
    let editor = open_editor::<TaskListState>(ctx)?;
    let previews = editor.document().previews(&editor.config().preview);
    if ctx.json {
        return print_json(&preview_to_json(previews));
    }
    println!("{}", previews.html);
    println!("{}", previews.plain);
    Ok(())
}

fn cmd_add(ctx: &Context, args: AddArgs) -> CliResult {
    let id = uuid::Uuid::new_v4().to_string();
    let group = args.group.clone();
    run_write::<TaskListState>(
        ctx,
        Command::AddTask {
            group: args.group,
            task: Task::new(id.clone(), args.description),
        },
    )?;
    if ctx.json {
        return print_json(&AddedJson { group, id });
    }
    println!("{}", id);
    Ok(())
}

fn cmd_checklist(ctx: &Context, action: ChecklistAction) -> CliResult {
    let command = match action {
        ChecklistAction::Show => {
            let editor = open_editor::<Checklist>(ctx)?;
            if ctx.json {
                return print_json(&checklist_to_json(editor.document()));
            }
            println!("{}", format_checklist(editor.document()));
            return Ok(());
        }
        ChecklistAction::Add(args) => ChecklistCommand::Add {
            description: args.description,
        },
        ChecklistAction::Edit(args) => ChecklistCommand::Modify {
            index: args.index,
            description: args.description,
        },
        ChecklistAction::Toggle(args) => ChecklistCommand::Toggle { index: args.index },
        ChecklistAction::Rm(args) => ChecklistCommand::Delete { index: args.index },
        ChecklistAction::Reopen => ChecklistCommand::ReopenCompleted,
        ChecklistAction::Clear => ChecklistCommand::DeleteCompleted,
        ChecklistAction::Mv(args) => ChecklistCommand::Move {
            from_section: args.from_section.into(),
            from_index: args.from_index,
            to_section: args.to_section.into(),
            to_index: args.to_index,
        },
    };
    run_write::<Checklist>(ctx, command)
}

fn cmd_set_locked(ctx: &Context, locked: bool) -> CliResult {
    let mut host = FileHost::open(&ctx.note)?;
    if host.flags().locked == locked {
        tracing::info!(locked, "lock flag already set");
        return Ok(());
    }
    host.set_locked(locked)?;
    Ok(())
}
