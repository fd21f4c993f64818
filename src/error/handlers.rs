//! Error handlers
//!
//! Provides error logging and reply code mapping for the shell.

use crate::error::types::{FolderError, FormatError, ShellError, StoreError};
use log::error;

/// Log a store error
pub fn handle_error(err: &StoreError) {
    error!("Folder store error: {}", err);
}

/// Convert error to shell reply code
pub fn error_to_reply_code(err: &StoreError) -> u16 {
    match err {
        StoreError::Format(FormatError::InvalidFileName(_))
        | StoreError::Format(FormatError::InvalidFolderName(_)) => 501,
        StoreError::Folder(FolderError::EmptyName) => 501,
        StoreError::Folder(FolderError::InvalidName(_)) => 501,
        StoreError::Folder(FolderError::FileNotFound(_)) => 550,
        StoreError::Folder(FolderError::FileAlreadyExists(_)) => 553,
        StoreError::Shell(ShellError::FolderNotFound(_)) => 550,
        StoreError::Shell(ShellError::FolderAlreadyExists(_)) => 553,
        StoreError::Shell(ShellError::FolderLimitReached(_)) => 552,
        StoreError::Shell(ShellError::CommandTooLong(_)) => 500,
        StoreError::Shell(ShellError::InvalidEncoding) => 500,
        StoreError::Shell(ShellError::UnknownCommand(_)) => 500,
        StoreError::Config(_) => 451,
        StoreError::Io(_) => 451,
    }
}
