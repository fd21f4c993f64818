//! Module `parser`
//!
//! Turns raw shell lines into `Command` values and defines the result types
//! handlers return.

use crate::storage::ICON_DIM;

/// A parsed shell command
#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Ls(Option<String>),
    Mkdir(String),
    Rmdir(String),
    Du(String),
    Rename {
        old: String,
        new: String,
    },
    Touch {
        folder: String,
        file: String,
        contents: String,
    },
    Write {
        folder: String,
        file: String,
        contents: String,
    },
    Cat {
        folder: String,
        file: String,
    },
    Icon {
        folder: String,
        file: String,
        pixels: [i32; ICON_DIM],
    },
    Rm {
        folder: String,
        file: String,
    },
    Mv {
        file: String,
        from: String,
        to: String,
    },
    Cp {
        file: String,
        from: String,
        to: String,
    },
    Unknown(String),
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    Exit,
}

/// Status plus the reply written back to the user.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

/// Splits off the first whitespace-separated token; the remainder keeps its
/// inner spacing.
fn next_token(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(end) => (&input[..end], input[end..].trim_start()),
        None => (input, ""),
    }
}

fn one_arg(rest: &str) -> Option<String> {
    match next_token(rest) {
        (arg, "") if !arg.is_empty() => Some(arg.to_string()),
        _ => None,
    }
}

fn two_args(rest: &str) -> Option<(String, String)> {
    let (first, rest) = next_token(rest);
    let (second, rest) = next_token(rest);
    if first.is_empty() || second.is_empty() || !rest.is_empty() {
        return None;
    }
    Some((first.to_string(), second.to_string()))
}

fn three_args(rest: &str) -> Option<(String, String, String)> {
    let (first, rest) = next_token(rest);
    let (second, third) = two_args(rest)?;
    if first.is_empty() {
        return None;
    }
    Some((first.to_string(), second, third))
}

fn parse_pixels(rest: &str) -> Option<[i32; ICON_DIM]> {
    let values = rest
        .split_whitespace()
        .map(str::parse::<i32>)
        .collect::<Result<Vec<_>, _>>()
        .ok()?;
    values.try_into().ok()
}

/// Parse raw command string into Command enum.
///
/// Known verbs with missing or malformed arguments parse as `Unknown`.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let (verb, rest) = next_token(trimmed);
    let unknown = || Command::Unknown(trimmed.to_string());

    match verb.to_ascii_uppercase().as_str() {
        "QUIT" | "Q" => Command::Quit,
        "HELP" => Command::Help,
        "LS" => match next_token(rest) {
            ("", _) => Command::Ls(None),
            (folder, "") => Command::Ls(Some(folder.to_string())),
            _ => unknown(),
        },
        "MKDIR" => match next_token(rest) {
            (folder, "") => Command::Mkdir(folder.to_string()),
            _ => unknown(),
        },
        "RMDIR" => match one_arg(rest) {
            Some(folder) => Command::Rmdir(folder),
            None => unknown(),
        },
        "DU" => match one_arg(rest) {
            Some(folder) => Command::Du(folder),
            None => unknown(),
        },
        "RENAME" => match two_args(rest) {
            Some((old, new)) => Command::Rename { old, new },
            None => unknown(),
        },
        "TOUCH" | "WRITE" => {
            let (folder, rest) = next_token(rest);
            let (file, contents) = next_token(rest);
            if folder.is_empty() || file.is_empty() {
                return unknown();
            }
            let (folder, file, contents) =
                (folder.to_string(), file.to_string(), contents.to_string());
            if verb.eq_ignore_ascii_case("TOUCH") {
                Command::Touch {
                    folder,
                    file,
                    contents,
                }
            } else if contents.is_empty() {
                unknown()
            } else {
                Command::Write {
                    folder,
                    file,
                    contents,
                }
            }
        }
        "CAT" => match two_args(rest) {
            Some((folder, file)) => Command::Cat { folder, file },
            None => unknown(),
        },
        "RM" => match two_args(rest) {
            Some((folder, file)) => Command::Rm { folder, file },
            None => unknown(),
        },
        "ICON" => {
            let (folder, rest) = next_token(rest);
            let (file, rest) = next_token(rest);
            match parse_pixels(rest) {
                Some(pixels) if !folder.is_empty() && !file.is_empty() => Command::Icon {
                    folder: folder.to_string(),
                    file: file.to_string(),
                    pixels,
                },
                _ => unknown(),
            }
        }
        "MV" => match three_args(rest) {
            Some((file, from, to)) => Command::Mv { file, from, to },
            None => unknown(),
        },
        "CP" => match three_args(rest) {
            Some((file, from, to)) => Command::Cp { file, from, to },
            None => unknown(),
        },
        _ => unknown(),
    }
}
