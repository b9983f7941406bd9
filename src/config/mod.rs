//! Configuration management.
//!
//! Configuration is read from a TOML file and overlaid with environment
//! variables prefixed `SINTA`, using `__` between section and key:
//!
//! ```toml
//! [portal]
//! base_url = "https://sinta.kemdikbud.go.id"
//!
//! [credentials]
//! username = "someone@example.ac.id"
//! password = "secret"
//!
//! [http]
//! timeout_secs = 30
//! connect_timeout_secs = 10
//!
//! [logging]
//! verbosity = "normal"
//! timestamps = false
//! ```
//!
//! ```bash
//! export SINTA__PORTAL__BASE_URL="http://localhost:8080"
//! export SINTA__LOGGING__VERBOSITY="verbose"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "sinta-av.toml";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where the portal lives
    #[serde(default)]
    pub portal: PortalConfig,

    /// Login credentials (optional; the CLI also reads flags and env vars)
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Portal location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://sinta.kemdikbud.go.id".to_string()
}

/// Stored credentials
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Connection timeout
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Custom user agent (defaults to the crate name and version)
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            user_agent: None,
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

/// How chatty the scraper is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Login and per-author progress
    #[default]
    Normal,
    /// Every request and page
    Verbose,
    /// Everything, including dependencies' internals
    Trace,
}

impl Verbosity {
    /// Raise the level by `steps` (saturating at `Trace`)
    pub fn raised(self, steps: u8) -> Self {
        let levels = [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Trace,
        ];
        let idx = levels.iter().position(|l| *l == self).unwrap_or(1);
        levels[(idx + steps as usize).min(levels.len() - 1)]
    }

    /// `EnvFilter` directive for this level
    pub fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "sinta_av=error",
            Verbosity::Normal => "sinta_av=info",
            Verbosity::Verbose => "sinta_av=debug",
            Verbosity::Trace => "sinta_av=trace,reqwest=debug",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    /// Prefix log lines with a timestamp
    #[serde(default)]
    pub timestamps: bool,
}


impl Config {
    /// Write this configuration as TOML
    pub fn save(&self, path: &Path) -> Result<(), ConfigFileError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigFileError::Serialize(e.to_string()))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| ConfigFileError::Io(e.to_string()))?;
            }
        }

        std::fs::write(path, content).map_err(|e| ConfigFileError::Io(e.to_string()))
    }
}

/// Configuration file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialize error: {0}")]
    Serialize(String),
}

/// Load configuration from a file, overlaid with `SINTA__*` environment variables
pub fn load_config(path: &Path) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("SINTA").separator("__"))
        .build()?;

    settings.try_deserialize()
}

/// Configuration from environment variables and defaults only
pub fn get_config() -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::Environment::with_prefix("SINTA").separator("__"))
        .build()?;

    settings.try_deserialize()
}

/// Find a config file in the usual places
///
/// Checks `./sinta-av.toml`, then `<config dir>/sinta-av/config.toml`.
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    let user = default_config_path()?;
    user.is_file().then_some(user)
}

/// Per-user config path, whether or not it exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sinta-av").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.portal.base_url, "https://sinta.kemdikbud.go.id");
        assert_eq!(config.http.timeout_secs, 30);
        assert_eq!(config.logging.verbosity, Verbosity::Normal);
        assert!(!config.logging.timestamps);
        assert!(config.credentials.username.is_none());
    }

    #[test]
    fn test_timestamps_off_unless_enabled() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        std::fs::write(&path, "[logging]\nverbosity = \"quiet\"\n").unwrap();
        assert!(!load_config(&path).unwrap().logging.timestamps);

        std::fs::write(&path, "[logging]\ntimestamps = true\n").unwrap();
        assert!(load_config(&path).unwrap().logging.timestamps);
    }

    #[test]
    fn test_config_file_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        std::fs::write(
            &path,
            r#"
[portal]
base_url = "http://localhost:9000"

[credentials]
username = "user@example.ac.id"
password = "hunter2"

[http]
timeout_secs = 5

[logging]
verbosity = "verbose"
timestamps = true
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.portal.base_url, "http://localhost:9000");
        assert_eq!(
            config.credentials.username.as_deref(),
            Some("user@example.ac.id")
        );
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.http.connect_timeout_secs, 10);
        assert_eq!(config.logging.verbosity, Verbosity::Verbose);
        assert!(config.logging.timestamps);
    }

    #[test]
    fn test_config_save_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.portal.base_url = "http://127.0.0.1:1234".to_string();
        config.logging.verbosity = Verbosity::Quiet;
        config.save(&path).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.portal.base_url, "http://127.0.0.1:1234");
        assert_eq!(loaded.logging.verbosity, Verbosity::Quiet);
    }

    #[test]
    fn test_config_file_nonexistent() {
        let result = load_config(Path::new("/nonexistent/sinta-av.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_raised() {
        assert_eq!(Verbosity::Normal.raised(1), Verbosity::Verbose);
        assert_eq!(Verbosity::Quiet.raised(0), Verbosity::Quiet);
        assert_eq!(Verbosity::Normal.raised(9), Verbosity::Trace);
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = CredentialsConfig {
            username: Some("u".to_string()),
            password: Some("secret".to_string()),
        };
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("secret"));
        assert!(printed.contains("<redacted>"));
    }
}
