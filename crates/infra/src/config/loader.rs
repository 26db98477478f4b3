//! Configuration loader
//!
//! Builds the application configuration from an optional file plus
//! environment overrides.
//!
//! ## Loading Strategy
//! 1. Use the explicit path when one is given, otherwise probe standard paths
//! 2. Fall back to built-in defaults when no file is found
//! 3. Apply `SHIPYARD_*` environment overrides on top
//! 4. Validate the result
//!
//! ## Environment Variables
//! - `SHIPYARD_UPSTREAM_BASE_URL`: Upstream API root
//! - `SHIPYARD_PAGE_SIZE`: Listing page size
//! - `SHIPYARD_USER_AGENT`: User-Agent sent upstream
//! - `SHIPYARD_MAX_RETRIES`: Retries after the first attempt
//! - `SHIPYARD_BACKOFF_BASE`: Exponential backoff base
//! - `SHIPYARD_BACKOFF_UNIT_MS`: Backoff unit in milliseconds
//! - `SHIPYARD_TIMEOUT_SECS`: Transport timeout in seconds
//! - `SHIPYARD_TIMEOUT_SCOPE`: `overall` or `per_attempt`
//! - `SHIPYARD_CACHE_KEY`: Aggregate cache key
//! - `SHIPYARD_CACHE_EXPIRATION_SECS`: Sliding expiration in seconds
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./shipyard.toml` or `./shipyard.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use shipyard_domain::{Config, Result, ShipyardError, TimeoutScope};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["shipyard.toml", "shipyard.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `ShipyardError::Config` if:
/// - An explicit `path` does not exist or cannot be read
/// - The file format is invalid
/// - An environment override cannot be parsed
/// - The merged configuration fails validation
pub fn load(path: Option<PathBuf>) -> Result<Config> {
    let mut config = match path.or_else(probe_config_paths) {
        Some(path) => load_from_file(&path)?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// Supports both JSON and TOML formats (detected by file extension). Missing
/// fields take their defaults.
///
/// # Errors
/// Returns `ShipyardError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(ShipyardError::Config(format!("Config file not found: {}", path.display())));
    }

    tracing::info!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| ShipyardError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ShipyardError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ShipyardError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ShipyardError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

/// Apply `SHIPYARD_*` environment overrides to `config`
///
/// # Errors
/// Returns `ShipyardError::Config` when a set variable has an invalid value.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    apply_overrides_from(config, |key| std::env::var(key).ok())
}

fn apply_overrides_from<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("SHIPYARD_UPSTREAM_BASE_URL") {
        config.upstream.base_url = url;
    }
    if let Some(size) = parsed(&lookup, "SHIPYARD_PAGE_SIZE")? {
        config.upstream.page_size = size;
    }
    if let Some(agent) = lookup("SHIPYARD_USER_AGENT") {
        config.upstream.user_agent = agent;
    }

    if let Some(retries) = parsed(&lookup, "SHIPYARD_MAX_RETRIES")? {
        config.resilience.max_retries = retries;
    }
    if let Some(base) = parsed(&lookup, "SHIPYARD_BACKOFF_BASE")? {
        config.resilience.backoff_base = base;
    }
    if let Some(unit) = parsed(&lookup, "SHIPYARD_BACKOFF_UNIT_MS")? {
        config.resilience.backoff_unit_ms = unit;
    }
    if let Some(secs) = parsed(&lookup, "SHIPYARD_TIMEOUT_SECS")? {
        config.resilience.timeout_secs = secs;
    }
    if let Some(scope) = lookup("SHIPYARD_TIMEOUT_SCOPE") {
        config.resilience.timeout_scope = parse_timeout_scope(&scope)?;
    }

    if let Some(key) = lookup("SHIPYARD_CACHE_KEY") {
        config.cache.key = key;
    }
    if let Some(secs) = parsed(&lookup, "SHIPYARD_CACHE_EXPIRATION_SECS")? {
        config.cache.sliding_expiration_secs = secs;
    }

    Ok(())
}

/// Parse an optional environment value
///
/// # Errors
/// Returns `ShipyardError::Config` naming the variable if parsing fails.
fn parsed<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| {
                ShipyardError::Config(format!("Invalid value for {key} ('{raw}'): {e}"))
            })
        })
        .transpose()
}

fn parse_timeout_scope(raw: &str) -> Result<TimeoutScope> {
    match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "overall" => Ok(TimeoutScope::Overall),
        "per_attempt" => Ok(TimeoutScope::PerAttempt),
        other => Err(ShipyardError::Config(format!(
            "Invalid value for SHIPYARD_TIMEOUT_SCOPE: '{other}' (expected overall or per_attempt)"
        ))),
    }
}
