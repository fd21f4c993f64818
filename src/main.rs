//! Folder Store - Entry Point
//!
//! An interactive shell over in-memory folders of files.

use log::{error, info};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use folder_store::config::ShellConfig;
use folder_store::error::StoreError;
use folder_store::error::handlers::handle_error;
use folder_store::shell::{Workspace, run_session};
use folder_store::utils::logging::setup_logging;

fn main() -> ExitCode {
    setup_logging();

    let config = match ShellConfig::load() {
        Ok(config) => config,
        Err(e) => {
            handle_error(&StoreError::from(e));
            return ExitCode::FAILURE;
        }
    };

    info!("Launching folder store shell...");

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout();
    let mut workspace = Workspace::new(config.max_folders);

    if let Err(e) = run_session(stdin.lock(), &mut stdout, &mut workspace, &config, interactive) {
        error!("Session aborted: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
