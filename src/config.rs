//! Configuration management for the folder store shell
//!
//! Settings come from built-in defaults, then an optional `folder_store.toml`,
//! then `FOLDER_STORE_*` environment variables.

use config::{Config, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "folder_store";
const DEFAULT_PROMPT: &str = "> ";
const DEFAULT_MAX_COMMAND_LENGTH: usize = 512;
const DEFAULT_MAX_FOLDERS: usize = 64;

/// Shell configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ShellConfig {
    /// Prompt written before each command when reading interactively
    pub prompt: String,

    /// Maximum accepted command line length in bytes
    pub max_command_length: usize,

    /// Maximum number of folders a workspace may hold
    pub max_folders: usize,

    /// Log every received command at info level
    pub echo_commands: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            max_command_length: DEFAULT_MAX_COMMAND_LENGTH,
            max_folders: DEFAULT_MAX_FOLDERS,
            echo_commands: false,
        }
    }
}

impl ShellConfig {
    /// Load configuration from `folder_store.toml` with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from the named file (extension optional, file optional)
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("prompt", defaults.prompt)?
            .set_default("max_command_length", defaults.max_command_length as i64)?
            .set_default("max_folders", defaults.max_folders as i64)?
            .set_default("echo_commands", defaults.echo_commands)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("FOLDER_STORE").try_parsing(true))
            .build()?;

        let config: ShellConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.max_command_length == 0 {
            return Err(config::ConfigError::Message(
                "max_command_length must be greater than 0".into(),
            ));
        }

        if self.max_folders == 0 {
            return Err(config::ConfigError::Message(
                "max_folders must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
