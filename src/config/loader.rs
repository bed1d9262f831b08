//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable holding the listen port.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid PORT value {0:?}: expected a port number")]
    InvalidPort(String),
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Where the effective listen port came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortSource {
    /// Built-in default or config file.
    Default,
    /// The `PORT` environment variable.
    Environment,
    /// The `--port` command line flag.
    CommandLine,
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Apply a raw `PORT` value. Unset or empty leaves the config untouched.
pub fn apply_port_env(
    config: &mut ServiceConfig,
    value: Option<&str>,
) -> Result<bool, ConfigError> {
    match value.map(str::trim) {
        None | Some("") => Ok(false),
        Some(raw) => {
            config.listener.port = raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?;
            Ok(true)
        }
    }
}

/// Build the effective configuration.
///
/// Precedence, lowest first: defaults, `file`, `PORT`, `port_override`.
pub fn load(
    file: Option<&Path>,
    port_override: Option<u16>,
) -> Result<(ServiceConfig, PortSource), ConfigError> {
    let env_port = std::env::var(PORT_ENV).ok();
    resolve(file, env_port.as_deref(), port_override)
}

fn resolve(
    file: Option<&Path>,
    env_port: Option<&str>,
    port_override: Option<u16>,
) -> Result<(ServiceConfig, PortSource), ConfigError> {
    let mut config = match file {
        Some(path) => read_config(path)?,
        None => ServiceConfig::default(),
    };

    let mut source = PortSource::Default;
    if apply_port_env(&mut config, env_port)? {
        source = PortSource::Environment;
    }
    if let Some(port) = port_override {
        config.listener.port = port;
        source = PortSource::CommandLine;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok((config, source))
}
