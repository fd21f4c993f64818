//! Name validation
//!
//! Handles the file-name and folder-name rules shared by constructors and rename.

use crate::error::FormatError;

/// Name given to a file constructed without one
pub const DEFAULT_FILE_NAME: &str = "NewFile.txt";

/// Name given to a folder constructed without one
pub const DEFAULT_FOLDER_NAME: &str = "NewFolder";

/// Validate a file name: one `.` that is neither first nor last, and only
/// ASCII alphanumerics around it.
pub fn validate_file_name(name: &str) -> Result<(), FormatError> {
    let invalid = || FormatError::InvalidFileName(name.to_string());

    let dot = name.find('.').ok_or_else(invalid)?;
    if dot == 0 || dot == name.len() - 1 {
        return Err(invalid());
    }

    if name.matches('.').count() != 1 {
        return Err(invalid());
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '.') {
        return Err(invalid());
    }

    Ok(())
}

/// Check that every character of a folder name is ASCII alphanumeric.
///
/// The empty string passes vacuously; callers decide what empty means.
pub fn is_alphanumeric_name(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Validate a folder name for construction
pub fn validate_folder_name(name: &str) -> Result<(), FormatError> {
    if is_alphanumeric_name(name) {
        Ok(())
    } else {
        Err(FormatError::InvalidFolderName(name.to_string()))
    }
}
