pub mod commands;
pub mod config;
pub mod error;
pub mod shell;
pub mod storage;
pub mod utils;

pub use error::{FolderError, FormatError, StoreError};
pub use storage::{File, Folder, ICON_DIM, Icon};
