//! In-memory file storage
//!
//! Handles files, their icons, folders and name validation.

pub mod file;
pub mod folder;
pub mod icon;
pub mod validation;

pub use file::File;
pub use folder::Folder;
pub use icon::{ICON_DIM, Icon};
