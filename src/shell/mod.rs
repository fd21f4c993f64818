//! Command shell
//!
//! Holds the folder workspace and the line-oriented session loop driving it.

pub mod session;
pub mod workspace;

pub use session::run_session;
pub use workspace::Workspace;
