//! Server configuration - environment modes and database settings
//!
//! Settings are resolved from three layers, highest precedence first:
//! - explicit overrides (CLI flags, which clap also fills from env vars)
//! - a TOML file with one table per environment mode (`palettes.toml`)
//! - built-in defaults for `development` and `test`
//!
//! `production` has no built-in database URL and must be configured.

use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "palettes.toml";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Kept low; every request issues exactly one statement.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown environment '{0}' (expected development, test or production)")]
    UnknownEnvironment(String),

    #[error("no database URL configured for the {0} environment")]
    MissingDatabaseUrl(Environment),

    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid bind address '{addr}': {source}")]
    InvalidBindAddress {
        addr: String,
        source: std::net::AddrParseError,
    },
}

/// Named deployment configuration selecting database parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }

    /// Built-in connection URL, if the mode has one.
    fn default_database_url(&self) -> Option<&'static str> {
        match self {
            Self::Development => Some("postgres://localhost/palette_picker"),
            Self::Test => Some("postgres://localhost/palette_picker_test"),
            Self::Production => None,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "test" => Ok(Self::Test),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

/// Per-environment table in the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseSection {
    pub database_url: Option<String>,
    pub max_connections: Option<u32>,
}

/// Parsed `palettes.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub development: Option<DatabaseSection>,
    #[serde(default)]
    pub test: Option<DatabaseSection>,
    #[serde(default)]
    pub production: Option<DatabaseSection>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn section(&self, environment: Environment) -> Option<&DatabaseSection> {
        match environment {
            Environment::Development => self.development.as_ref(),
            Environment::Test => self.test.as_ref(),
            Environment::Production => self.production.as_ref(),
        }
    }
}

/// Values supplied by the caller that win over file and defaults
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub environment: Option<Environment>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_url: Option<String>,
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseSettings {
    /// Connection URL with the password replaced, safe for logs.
    pub fn redacted_url(&self) -> String {
        redact_password(&self.url)
    }
}

/// Fully resolved server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    pub database: DatabaseSettings,
}

impl Settings {
    /// Resolve settings, reading the config file if one is named or
    /// `palettes.toml` exists in the working directory.
    pub fn load(overrides: Overrides) -> Result<Self, ConfigError> {
        let path = overrides.config_path.clone().or_else(|| {
            let candidate = PathBuf::from(DEFAULT_CONFIG_FILE);
            candidate.exists().then_some(candidate)
        });

        let file = match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading config file");
                Some(ConfigFile::load(&path)?)
            }
            None => None,
        };

        Self::resolve(overrides, file.as_ref())
    }

    /// Pure resolution of overrides against an optional config file.
    pub fn resolve(overrides: Overrides, file: Option<&ConfigFile>) -> Result<Self, ConfigError> {
        let environment = overrides.environment.unwrap_or_default();
        let section = file.and_then(|f| f.section(environment));

        let url = overrides
            .database_url
            .filter(|url| !url.is_empty())
            .or_else(|| section.and_then(|s| s.database_url.clone()))
            .or_else(|| environment.default_database_url().map(str::to_owned))
            .ok_or(ConfigError::MissingDatabaseUrl(environment))?;

        let max_connections = section
            .and_then(|s| s.max_connections)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        Ok(Self {
            environment,
            host: overrides.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides.port.unwrap_or(DEFAULT_PORT),
            database: DatabaseSettings {
                url,
                max_connections,
            },
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|source| ConfigError::InvalidBindAddress { addr, source })
    }
}

fn redact_password(url: &str) -> String {
    let Some(scheme_end) = url.find("://").map(|i| i + 3) else {
        return url.to_string();
    };
    let rest = &url[scheme_end..];
    let authority_end = rest.find('/').unwrap_or(rest.len());
    let Some(at) = rest[..authority_end].rfind('@') else {
        return url.to_string();
    };
    let userinfo = &rest[..at];
    match userinfo.find(':') {
        Some(colon) => format!(
            "{}{}:***{}",
            &url[..scheme_end],
            &userinfo[..colon],
            &rest[at..]
        ),
        None => url.to_string(),
    }
}
