//! Error types
//!
//! Defines the construction-time and operational error types of the store.

use std::fmt;
use std::io;

/// Name validation failure raised while constructing a `File` or `Folder`.
///
/// Carries the offending input so callers can report exactly what was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    InvalidFileName(String),
    InvalidFolderName(String),
}

impl FormatError {
    /// The input that failed validation
    pub fn input(&self) -> &str {
        match self {
            FormatError::InvalidFileName(name) | FormatError::InvalidFolderName(name) => name,
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidFileName(n) => write!(f, "Invalid filename format: {}", n),
            FormatError::InvalidFolderName(n) => write!(f, "Invalid folder name: {}", n),
        }
    }
}

impl std::error::Error for FormatError {}

/// Folder operation errors
///
/// A failed operation never mutates the folders involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderError {
    EmptyName,
    FileAlreadyExists(String),
    FileNotFound(String),
    InvalidName(String),
}

impl fmt::Display for FolderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolderError::EmptyName => write!(f, "Empty name"),
            FolderError::FileAlreadyExists(n) => write!(f, "File already exists: {}", n),
            FolderError::FileNotFound(n) => write!(f, "File not found: {}", n),
            FolderError::InvalidName(n) => write!(f, "Invalid name: {:?}", n),
        }
    }
}

impl std::error::Error for FolderError {}

/// Shell and workspace errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    FolderNotFound(String),
    FolderAlreadyExists(String),
    FolderLimitReached(usize),
    CommandTooLong(usize),
    InvalidEncoding,
    UnknownCommand(String),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::FolderNotFound(n) => write!(f, "Folder not found: {}", n),
            ShellError::FolderAlreadyExists(n) => write!(f, "Folder already exists: {}", n),
            ShellError::FolderLimitReached(max) => {
                write!(f, "Folder limit reached ({} folders)", max)
            }
            ShellError::CommandTooLong(len) => write!(f, "Command too long ({} bytes)", len),
            ShellError::InvalidEncoding => write!(f, "Command is not valid UTF-8"),
            ShellError::UnknownCommand(cmd) => write!(f, "Unknown command: {}", cmd),
        }
    }
}

impl std::error::Error for ShellError {}

/// General store error that encompasses all error types
#[derive(Debug)]
pub enum StoreError {
    Format(FormatError),
    Folder(FolderError),
    Shell(ShellError),
    Config(config::ConfigError),
    Io(io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Format(e) => write!(f, "Format error: {}", e),
            StoreError::Folder(e) => write!(f, "Folder error: {}", e),
            StoreError::Shell(e) => write!(f, "Shell error: {}", e),
            StoreError::Config(e) => write!(f, "Configuration error: {}", e),
            StoreError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<FormatError> for StoreError {
    fn from(error: FormatError) -> Self {
        StoreError::Format(error)
    }
}

impl From<FolderError> for StoreError {
    fn from(error: FolderError) -> Self {
        StoreError::Folder(error)
    }
}

impl From<ShellError> for StoreError {
    fn from(error: ShellError) -> Self {
        StoreError::Shell(error)
    }
}

impl From<config::ConfigError> for StoreError {
    fn from(error: config::ConfigError) -> Self {
        StoreError::Config(error)
    }
}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::Io(error)
    }
}
