//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. A `.env` file, if present, is merged into the process environment
//! 2. Attempts to load from environment variables
//! 3. If a required variable is missing, falls back to loading from file
//! 4. Probes multiple paths for config files (JSON and TOML)
//!
//! ## Environment Variables
//! Required:
//! - `NOTION_API_KEY`: Notion integration token
//! - `NOTION_DATABASE_ID`: Database receiving one log page per entry
//! - `NOTION_SUMMARY_DB_ID`: Database holding per-category summaries
//!
//! Optional:
//! - `MONGO_URI`: Document store connection string (accepted, unused)
//! - `NOTION_API_URL`: API base URL (default `https://api.notion.com`)
//! - `NOTION_VERSION`: `Notion-Version` header (default `2022-06-28`)
//! - `TIMESYNC_HOST` / `TIMESYNC_PORT`: Listener address (default `0.0.0.0:8000`)
//! - `TIMESYNC_HTTP_TIMEOUT_SECS`: Outbound request timeout (default 30)
//! - `TIMESYNC_HTTP_MAX_ATTEMPTS`: Attempts per outbound request (default 1)
//! - `TIMESYNC_LOG_FORMAT`: `text` or `json` (default `text`)
//! - `TIMESYNC_LOG_FILTER`: Default log filter when `RUST_LOG` is unset
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./timesync.toml`, `./timesync.json`, `./config.toml`, `./config.json`
//! 2. The same names in the parent and grandparent directories
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use timesync_domain::{
    Config, DocumentStoreConfig, HttpConfig, LogFormat, LoggingConfig, NotionConfig, Result,
    ServerConfig, TimeSyncError,
};

const CONFIG_FILE_NAMES: [&str; 4] = ["timesync.toml", "timesync.json", "config.toml", "config.json"];

/// Merge a `.env` file into the process environment, if one exists.
///
/// Returns the path that was loaded, or `None` when there is no `.env`.
/// Runs before logging is installed, so callers log the result.
///
/// # Errors
/// Returns `TimeSyncError::Config` if the file exists but cannot be parsed.
pub fn load_dotenv() -> Result<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(TimeSyncError::Config(format!("Invalid .env file: {err}"))),
    }
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Environment,
    /// `reason` is why the environment alone was not enough.
    File { path: PathBuf, reason: String },
}

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to the first config file found by
/// [`probe_config_paths`]. Nothing is logged here since this runs before
/// the subscriber is installed; callers log the returned source.
///
/// # Errors
/// Returns `TimeSyncError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<(Config, ConfigSource)> {
    let env_err = match load_from_env() {
        Ok(config) => return Ok((config, ConfigSource::Environment)),
        Err(err) => err,
    };

    let path = probe_config_paths().ok_or_else(|| {
        TimeSyncError::Config(format!(
            "{env_err}; no config file found in any of the standard locations"
        ))
    })?;

    let config = load_from_file(Some(path.clone()))
        .map_err(|file_err| TimeSyncError::Config(format!("{env_err}; {file_err}")))?;

    Ok((config, ConfigSource::File { path, reason: env_err.to_string() }))
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `TimeSyncError::Config` if required variables are missing
/// or optional ones have invalid values.
pub fn load_from_env() -> Result<Config> {
    let notion = NotionConfig {
        api_key: env_var("NOTION_API_KEY")?,
        logs_database_id: env_var("NOTION_DATABASE_ID")?,
        summary_database_id: env_var("NOTION_SUMMARY_DB_ID")?,
        api_url: env_or("NOTION_API_URL", "https://api.notion.com"),
        api_version: env_or("NOTION_VERSION", "2022-06-28"),
    };

    let server_defaults = ServerConfig::default();
    let server = ServerConfig {
        host: env_or("TIMESYNC_HOST", &server_defaults.host),
        port: env_parse("TIMESYNC_PORT", server_defaults.port)?,
    };

    let http_defaults = HttpConfig::default();
    let http = HttpConfig {
        timeout_seconds: env_parse("TIMESYNC_HTTP_TIMEOUT_SECS", http_defaults.timeout_seconds)?,
        max_attempts: env_parse("TIMESYNC_HTTP_MAX_ATTEMPTS", http_defaults.max_attempts)?,
    };

    let logging_defaults = LoggingConfig::default();
    let logging = LoggingConfig {
        format: env_parse::<LogFormat>("TIMESYNC_LOG_FORMAT", logging_defaults.format)?,
        filter: env_or("TIMESYNC_LOG_FILTER", &logging_defaults.filter),
    };

    let document_store =
        DocumentStoreConfig { uri: std::env::var("MONGO_URI").ok().filter(|s| !s.is_empty()) };

    Ok(Config { server, notion, document_store, http, logging })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `TimeSyncError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The file has no API key and `NOTION_API_KEY` is unset
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(TimeSyncError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            TimeSyncError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| TimeSyncError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path).and_then(require_api_key)
}

/// A file may leave the token out so it never lands on disk; it must then
/// come from `NOTION_API_KEY`.
fn require_api_key(mut config: Config) -> Result<Config> {
    if config.notion.api_key.is_empty() {
        config.notion.api_key = env_var("NOTION_API_KEY").map_err(|_| {
            TimeSyncError::Config(
                "Notion API key missing: set notion.api_key or NOTION_API_KEY".to_string(),
            )
        })?;
    }
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| TimeSyncError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| TimeSyncError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(TimeSyncError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required, non-empty environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty()).ok_or_else(|| {
        TimeSyncError::Config(format!("Missing required environment variable: {}", key))
    })
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).ok().filter(|value| !value.is_empty()).unwrap_or_else(|| default.into())
}

/// Parse an optional environment variable, falling back to `default` if unset
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|e| TimeSyncError::Config(format!("Invalid value for {}: {}", key, e))),
        _ => Ok(default),
    }
}
