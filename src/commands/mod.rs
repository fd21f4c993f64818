mod handlers;
mod parser;
pub mod responses;

pub use handlers::handle_command;
pub use parser::{Command, CommandResult, CommandStatus, parse_command};
