//! CLI command implementation
//!
//! Startup sequence:
//! 1. Parse arguments
//! 2. Load configuration (file, then argument overrides)
//! 3. Configure the logger
//! 4. Run the interactive shell over stdin/stdout

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::RosterHandler;
use crate::observability::{log_event_with_fields, Event, Logger, Severity};

use super::args::Cli;
use super::errors::{CliError, CliResult};
use super::io::Prompter;
use super::shell::Shell;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Minimum log severity (optional, default "error")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Print the welcome banner at startup (optional, default true)
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,
}

fn default_log_level() -> String {
    "error".to_string()
}
fn default_show_banner() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            show_banner: default_show_banner(),
        }
    }
}

impl Config {
    /// Load and validate configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Build the effective configuration: defaults, then the optional
    /// file, then command line overrides. Validated once, after overrides,
    /// so `--log-level` can replace a bad level from the file.
    pub fn resolve(path: Option<&Path>, log_level: Option<&str>) -> CliResult<Self> {
        let mut config = match path {
            Some(path) => Self::read(path)?,
            None => Self::default(),
        };

        if let Some(level) = log_level {
            config.log_level = level.to_string();
        }

        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        self.min_severity()?;
        Ok(())
    }

    /// Parsed `log_level`
    pub fn min_severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse::<Severity>()
            .map_err(|e| CliError::config_error(format!("Invalid log_level: {}", e)))
    }
}

/// Main CLI entry point
///
/// Parses arguments and runs the shell.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli)
}

/// Run the shell with the given arguments on the process's stdin/stdout
pub fn run_command(cli: Cli) -> CliResult<()> {
    let config = Config::resolve(cli.config.as_deref(), cli.log_level.as_deref())?;

    Logger::set_min_severity(config.min_severity()?);
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("log_level", config.log_level.as_str()),
            ("show_banner", if config.show_banner { "true" } else { "false" }),
        ],
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(
        RosterHandler::new(),
        Prompter::new(stdin.lock(), stdout.lock()),
        config.show_banner,
    );

    shell.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::errors::CliErrorCode;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("rosterdb.json");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_file() {
        let config = Config::resolve(None, None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.min_severity().unwrap(), Severity::Error);
        assert!(config.show_banner);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{}");
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_file_values() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"log_level": "info", "show_banner": false}"#);

        let config = Config::load(&path).unwrap();
        assert_eq!(config.min_severity().unwrap(), Severity::Info);
        assert!(!config.show_banner);
    }

    #[test]
    fn test_argument_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"log_level": "info"}"#);

        let config = Config::resolve(Some(path.as_path()), Some("warn")).unwrap();
        assert_eq!(config.min_severity().unwrap(), Severity::Warn);
    }

    #[test]
    fn test_invalid_level_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"log_level": "chatty"}"#);
        let err = Config::load(&path).unwrap_err();
        assert_eq!(err.code_str(), "ROSTER_CLI_CONFIG_ERROR");

        assert!(Config::resolve(None, Some("chatty")).is_err());
        assert!(Config::resolve(Some(path.as_path()), None).is_err());
    }

    #[test]
    fn test_argument_replaces_bad_file_level() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"log_level": "chatty", "show_banner": false}"#);

        let config = Config::resolve(Some(path.as_path()), Some("info")).unwrap();
        assert_eq!(config.min_severity().unwrap(), Severity::Info);
        assert!(!config.show_banner);
    }

    #[test]
    fn test_malformed_json_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{ not json");
        let err = Config::load(&path).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
        assert!(err.message().contains("Invalid config JSON"));
    }

    #[test]
    fn test_missing_file_rejected() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.message().contains("Failed to read config"));
    }
}
