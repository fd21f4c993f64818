//! Shell session loop
//!
//! Reads command lines, dispatches them against a workspace and writes the
//! replies back until QUIT or end of input.

use log::{debug, error, info, warn};
use std::io::{self, BufRead, Write};

use crate::commands::responses::{self, format_reply};
use crate::commands::{CommandStatus, handle_command, parse_command};
use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::shell::Workspace;

/// Runs one shell session.
///
/// - Rejects lines longer than `max_command_length` (line ending excluded)
///   or not valid UTF-8 without parsing them; the session carries on.
/// - Writes the configured prompt before each read when `interactive` is set.
/// - Returns once QUIT is handled or the reader is exhausted.
pub fn run_session<R: BufRead, W: Write>(
    mut reader: R,
    writer: &mut W,
    workspace: &mut Workspace,
    config: &ShellConfig,
    interactive: bool,
) -> io::Result<()> {
    let mut buf = Vec::new();

    loop {
        if interactive {
            write!(writer, "{}", config.prompt)?;
            writer.flush()?;
        }

        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                info!("End of input, closing session");
                break;
            }
            Ok(_) => {
                let raw = strip_line_ending(&buf);
                if raw.len() > config.max_command_length {
                    reject(writer, ShellError::CommandTooLong(raw.len()))?;
                    continue;
                }

                let trimmed = match std::str::from_utf8(raw) {
                    Ok(text) => text,
                    Err(e) => {
                        warn!("Rejected command that is not valid UTF-8: {}", e);
                        reject(writer, ShellError::InvalidEncoding)?;
                        continue;
                    }
                };
                if trimmed.trim().is_empty() {
                    continue;
                }

                let command = parse_command(trimmed);
                if config.echo_commands {
                    info!("Received: {:?}", command);
                } else {
                    debug!("Received: {:?}", command);
                }

                let result = handle_command(workspace, &command);
                if let Some(msg) = result.message {
                    writer.write_all(msg.as_bytes())?;
                }

                if result.status == CommandStatus::Exit {
                    info!("Session closed by QUIT");
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read command: {}", e);
                return Err(e);
            }
        }
    }

    writer.flush()
}

/// The line without its trailing `\n` or `\r\n`.
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn reject<W: Write>(writer: &mut W, err: ShellError) -> io::Result<()> {
    writer.write_all(format_reply(responses::UNKNOWN_COMMAND, &err.to_string()).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str, config: &ShellConfig) -> (String, Workspace) {
        let mut workspace = Workspace::new(config.max_folders);
        let mut output = Vec::new();
        run_session(Cursor::new(input), &mut output, &mut workspace, config, false).unwrap();
        (String::from_utf8(output).unwrap(), workspace)
    }

    #[test]
    fn test_session_stops_at_quit() {
        let config = ShellConfig::default();
        let (output, workspace) = session("MKDIR A\nQUIT\nMKDIR B\n", &config);
        assert_eq!(output, "200 Created folder A\n221 Goodbye\n");
        assert_eq!(workspace.folder_names(), vec!["A"]);
    }

    #[test]
    fn test_session_ends_at_eof_and_skips_blank_lines() {
        let config = ShellConfig::default();
        let (output, workspace) = session("\r\n   \nMKDIR A\r\n", &config);
        assert_eq!(output, "200 Created folder A\n");
        assert_eq!(workspace.len(), 1);
    }

    #[test]
    fn test_long_lines_rejected() {
        let config = ShellConfig {
            max_command_length: 10,
            ..ShellConfig::default()
        };
        let (output, workspace) = session("MKDIR ABCDEFGHIJ\n", &config);
        assert_eq!(output, "500 Command too long (16 bytes)\n");
        assert!(workspace.is_empty());
    }

    #[test]
    fn test_length_limit_excludes_line_ending() {
        let config = ShellConfig {
            max_command_length: 7,
            ..ShellConfig::default()
        };
        let (output, workspace) = session("MKDIR A\nMKDIR B\r\nMKDIR CD\n", &config);
        assert_eq!(
            output,
            "200 Created folder A\n200 Created folder B\n500 Command too long (8 bytes)\n"
        );
        assert_eq!(workspace.folder_names(), vec!["A", "B"]);
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_session() {
        let config = ShellConfig::default();
        let mut workspace = Workspace::new(config.max_folders);
        let mut output = Vec::new();
        let input: &[u8] = b"MKDIR A\nTOUCH A \xff.txt\nMKDIR B\nQUIT\nMKDIR C\n";

        run_session(input, &mut output, &mut workspace, &config, false).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            concat!(
                "200 Created folder A\n",
                "500 Command is not valid UTF-8\n",
                "200 Created folder B\n",
                "221 Goodbye\n",
            )
        );
        assert_eq!(workspace.folder_names(), vec!["A", "B"]);
    }

    #[test]
    fn test_interactive_prompt() {
        let config = ShellConfig {
            prompt: "fs> ".into(),
            ..ShellConfig::default()
        };
        let mut workspace = Workspace::new(4);
        let mut output = Vec::new();
        run_session(Cursor::new("Q\n"), &mut output, &mut workspace, &config, true).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "fs> 221 Goodbye\n");
    }
}
