//! Module `file`
//!
//! Defines the `File` value type: a validated name, textual contents and an
//! optional exclusively owned icon buffer.

use std::cmp::Ordering;
use std::fmt;

use crate::error::FormatError;
use crate::storage::icon::Icon;
use crate::storage::validation::{DEFAULT_FILE_NAME, validate_file_name};

/// An in-memory file.
///
/// Cloning deep-copies the name, contents and icon. Moving transfers all
/// three; `std::mem::take` leaves the source as a default, icon-free file.
/// Files compare and order by name alone.
#[derive(Debug, Clone)]
pub struct File {
    name: String,
    contents: String,
    icon: Option<Icon>,
}

impl Default for File {
    fn default() -> Self {
        Self {
            name: DEFAULT_FILE_NAME.to_string(),
            contents: String::new(),
            icon: None,
        }
    }
}

impl File {
    /// Creates a file, validating `name`.
    ///
    /// An empty name selects `NewFile.txt`; contents and icon are stored
    /// either way. The file takes ownership of `icon`.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidFileName` if `name` is non-empty and
    /// not of the form `<alnum>.<alnum>`.
    pub fn new(
        name: &str,
        contents: impl Into<String>,
        icon: Option<Icon>,
    ) -> Result<Self, FormatError> {
        let name = if name.is_empty() {
            DEFAULT_FILE_NAME.to_string()
        } else {
            validate_file_name(name)?;
            name.to_string()
        };

        Ok(Self {
            name,
            contents: contents.into(),
            icon,
        })
    }

    /// Creates an empty file with no icon.
    pub fn named(name: &str) -> Result<Self, FormatError> {
        Self::new(name, String::new(), None)
    }

    // --------------------
    // Getter methods
    // --------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Returns a read-only view of the icon, if the file owns one.
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// Size of the contents in bytes.
    pub fn size(&self) -> usize {
        self.contents.len()
    }

    // --------------------
    // Setter methods
    // --------------------

    pub fn set_contents(&mut self, contents: impl Into<String>) {
        self.contents = contents.into();
    }

    /// Takes ownership of `icon`, releasing any icon held before.
    pub fn set_icon(&mut self, icon: Icon) {
        self.icon = Some(icon);
    }

    /// Moves the icon out, leaving the file without one.
    pub fn take_icon(&mut self) -> Option<Icon> {
        self.icon.take()
    }
}

impl PartialEq for File {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for File {}

impl PartialOrd for File {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for File {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Size: {} bytes", self.size())?;
        write!(f, "Contents: {}", self.contents)
    }
}
