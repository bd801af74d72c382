//! Exec target configuration.
//!
//! Loaded from an optional TOML file. Every key has a default, so an empty
//! file (or no file at all) reproduces the built-in target: `pwd` with no
//! further arguments.
//!
//! ```toml
//! [exec]
//! program = "pwd"
//! args = []
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ExecveTestError;

/// Program executed when nothing else is configured.
pub const DEFAULT_PROGRAM: &str = "pwd";

/// Top-level config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub exec: ExecSection,
}

/// The `[exec]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ExecSection {
    /// Program name, searched on `PATH` unless it contains a slash.
    pub program: String,
    /// Arguments after `argv[0]`.
    pub args: Vec<String>,
}

impl Default for ExecSection {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: Vec::new(),
        }
    }
}

/// Load the config at `path`, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<Config, ExecveTestError> {
    match path {
        Some(path) => parse_config(path),
        None => Ok(Config::default()),
    }
}

/// Parse a config from a TOML file path.
pub fn parse_config(path: &Path) -> Result<Config, ExecveTestError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ExecveTestError::ConfigParse(format!("config file not found: {}", path.display()))
        } else {
            ExecveTestError::Io(e)
        }
    })?;
    parse_config_str(&content)
}

/// Parse a config from a TOML string.
pub fn parse_config_str(content: &str) -> Result<Config, ExecveTestError> {
    toml::from_str(content)
        .map_err(|e| ExecveTestError::ConfigParse(format!("invalid TOML: {e}")))
}
