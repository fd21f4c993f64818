//! Command handlers for the folder store shell.
//!
//! Each handler applies one parsed command to the workspace and renders
//! the reply. Operational failures never abort the session; they become
//! failure replies carrying the matching reply code.

use log::{info, warn};

use crate::commands::parser::{Command, CommandResult, CommandStatus};
use crate::commands::responses::{self, format_reply};
use crate::error::handlers::error_to_reply_code;
use crate::error::{FolderError, ShellError, StoreError};
use crate::shell::Workspace;
use crate::storage::{File, Folder, Icon};

const HELP_TEXT: &[&str] = &[
    "MKDIR [folder]",
    "RMDIR <folder>",
    "RENAME <old> <new>",
    "TOUCH <folder> <file> [contents]",
    "WRITE <folder> <file> <contents>",
    "CAT <folder> <file>",
    "ICON <folder> <file> <p1> <p2> <p3> <p4>",
    "RM <folder> <file>",
    "MV <file> <from> <to>",
    "CP <file> <from> <to>",
    "LS [folder]",
    "DU <folder>",
    "QUIT",
];

/// Dispatches a parsed command to its handler.
pub fn handle_command(workspace: &mut Workspace, command: &Command) -> CommandResult {
    let outcome: Result<CommandResult, StoreError> = match command {
        Command::Quit => return handle_cmd_quit(),
        Command::Help => Ok(handle_cmd_help()),
        Command::Unknown(raw) => Err(ShellError::UnknownCommand(raw.to_string()).into()),
        Command::Ls(None) => Ok(handle_cmd_ls_workspace(workspace)),
        Command::Ls(Some(folder)) => handle_cmd_ls_folder(workspace, folder),
        Command::Mkdir(folder) => handle_cmd_mkdir(workspace, folder),
        Command::Rmdir(folder) => handle_cmd_rmdir(workspace, folder),
        Command::Du(folder) => handle_cmd_du(workspace, folder),
        Command::Rename { old, new } => handle_cmd_rename(workspace, old, new),
        Command::Touch {
            folder,
            file,
            contents,
        } => handle_cmd_touch(workspace, folder, file, contents),
        Command::Write {
            folder,
            file,
            contents,
        } => handle_cmd_write(workspace, folder, file, contents),
        Command::Cat { folder, file } => handle_cmd_cat(workspace, folder, file),
        Command::Icon {
            folder,
            file,
            pixels,
        } => handle_cmd_icon(workspace, folder, file, *pixels),
        Command::Rm { folder, file } => handle_cmd_rm(workspace, folder, file),
        Command::Mv { file, from, to } => handle_cmd_mv(workspace, file, from, to),
        Command::Cp { file, from, to } => handle_cmd_cp(workspace, file, from, to),
    };

    outcome.unwrap_or_else(|err| failure(&err))
}

fn success(message: String) -> CommandResult {
    CommandResult {
        status: CommandStatus::Success,
        message: Some(message),
    }
}

fn failure(err: &StoreError) -> CommandResult {
    warn!("Command failed: {}", err);
    let text = match err {
        StoreError::Format(e) => e.to_string(),
        StoreError::Folder(e) => e.to_string(),
        StoreError::Shell(e) => e.to_string(),
        StoreError::Config(e) => e.to_string(),
        StoreError::Io(e) => e.to_string(),
    };

    CommandResult {
        status: CommandStatus::Failure(text.clone()),
        message: Some(format_reply(error_to_reply_code(err), &text)),
    }
}

fn existing<'a>(workspace: &'a Workspace, folder: &str) -> Result<&'a Folder, StoreError> {
    workspace
        .folder(folder)
        .ok_or_else(|| ShellError::FolderNotFound(folder.to_string()).into())
}

fn existing_file_mut<'a>(
    workspace: &'a mut Workspace,
    folder: &str,
    file: &str,
) -> Result<&'a mut File, StoreError> {
    workspace
        .folder_mut(folder)?
        .file_mut(file)
        .ok_or_else(|| FolderError::FileNotFound(file.to_string()).into())
}

fn handle_cmd_quit() -> CommandResult {
    CommandResult {
        status: CommandStatus::Exit,
        message: Some(format_reply(responses::GOODBYE, "Goodbye")),
    }
}

fn handle_cmd_help() -> CommandResult {
    let mut message = format_reply(responses::HELP, "Commands:");
    for line in HELP_TEXT {
        message.push_str(&format!("   {}\n", line));
    }
    success(message)
}

fn handle_cmd_ls_workspace(workspace: &Workspace) -> CommandResult {
    let names = workspace.folder_names();
    let mut message = format_reply(responses::LISTING, &format!("{} folder(s)", names.len()));
    for name in names {
        message.push_str(&format!("   {}\n", name));
    }
    success(message)
}

fn handle_cmd_ls_folder(
    workspace: &mut Workspace,
    folder: &str,
) -> Result<CommandResult, StoreError> {
    let folder = workspace.folder_mut(folder)?;

    let mut listing = Vec::new();
    folder.write_listing(&mut listing)?;

    let mut message = format_reply(responses::LISTING, "Listing follows");
    message.push_str(&String::from_utf8_lossy(&listing));
    Ok(success(message))
}

fn handle_cmd_mkdir(workspace: &mut Workspace, folder: &str) -> Result<CommandResult, StoreError> {
    let created = workspace.create_folder(folder)?;
    info!("Folder {} created", created);
    Ok(success(format_reply(
        responses::OK,
        &format!("Created folder {}", created),
    )))
}

fn handle_cmd_rmdir(workspace: &mut Workspace, folder: &str) -> Result<CommandResult, StoreError> {
    let removed = workspace.remove_folder(folder)?;
    Ok(success(format_reply(
        responses::OK,
        &format!("Removed folder {} ({} files)", removed.name(), removed.len()),
    )))
}

fn handle_cmd_du(workspace: &Workspace, folder: &str) -> Result<CommandResult, StoreError> {
    let folder = existing(workspace, folder)?;
    Ok(success(format_reply(
        responses::LISTING,
        &format!("{}: {} bytes", folder.name(), folder.size()),
    )))
}

fn handle_cmd_rename(
    workspace: &mut Workspace,
    old: &str,
    new: &str,
) -> Result<CommandResult, StoreError> {
    workspace.rename_folder(old, new)?;
    Ok(success(format_reply(
        responses::OK,
        &format!("Renamed {} to {}", old, new),
    )))
}

fn handle_cmd_touch(
    workspace: &mut Workspace,
    folder: &str,
    file: &str,
    contents: &str,
) -> Result<CommandResult, StoreError> {
    let destination = workspace.folder_mut(folder)?;
    let file = File::new(file, contents, None)?;
    let name = file.name().to_string();
    destination.add_file(file)?;
    Ok(success(format_reply(
        responses::OK,
        &format!("Created {} in {}", name, folder),
    )))
}

fn handle_cmd_write(
    workspace: &mut Workspace,
    folder: &str,
    file: &str,
    contents: &str,
) -> Result<CommandResult, StoreError> {
    let target = existing_file_mut(workspace, folder, file)?;
    target.set_contents(contents);
    Ok(success(format_reply(
        responses::OK,
        &format!("Wrote {} bytes to {}", target.size(), file),
    )))
}

fn handle_cmd_cat(
    workspace: &Workspace,
    folder: &str,
    file: &str,
) -> Result<CommandResult, StoreError> {
    let file = existing(workspace, folder)?
        .file(file)
        .ok_or_else(|| FolderError::FileNotFound(file.to_string()))?;

    let mut message = format_reply(responses::LISTING, "File follows");
    message.push_str(&format!("{}\n", file));
    Ok(success(message))
}

fn handle_cmd_icon(
    workspace: &mut Workspace,
    folder: &str,
    file: &str,
    pixels: [i32; crate::storage::ICON_DIM],
) -> Result<CommandResult, StoreError> {
    let target = existing_file_mut(workspace, folder, file)?;
    target.set_icon(Icon::from(pixels));
    Ok(success(format_reply(
        responses::OK,
        &format!("Icon set for {}", file),
    )))
}

fn handle_cmd_rm(
    workspace: &mut Workspace,
    folder: &str,
    file: &str,
) -> Result<CommandResult, StoreError> {
    workspace.folder_mut(folder)?.remove_file(file)?;
    Ok(success(format_reply(
        responses::OK,
        &format!("Removed {} from {}", file, folder),
    )))
}

fn handle_cmd_mv(
    workspace: &mut Workspace,
    file: &str,
    from: &str,
    to: &str,
) -> Result<CommandResult, StoreError> {
    workspace.move_file(file, from, to)?;
    Ok(success(format_reply(
        responses::OK,
        &format!("Moved {} from {} to {}", file, from, to),
    )))
}

fn handle_cmd_cp(
    workspace: &mut Workspace,
    file: &str,
    from: &str,
    to: &str,
) -> Result<CommandResult, StoreError> {
    workspace.copy_file(file, from, to)?;
    Ok(success(format_reply(
        responses::OK,
        &format!("Copied {} from {} to {}", file, from, to),
    )))
}
