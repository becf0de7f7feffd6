//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export DB_FILE="/var/lib/snaplink/urls.json"
//! export LISTEN="0.0.0.0:3000"
//! export BASE_URL="https://s.example.com"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `DB_FILE` - Path of the JSON mapping document (default: `urls.json`)
//! - `STORAGE` - `file` or `memory` (default: `file`)
//! - `STATIC_DIR` - Directory of public assets holding `index.html` (default: `static`)
//! - `BASE_URL` - Public base for short URLs (default: derived from `Host`)
//! - `CODE_MAX_ATTEMPTS` - Random draws before giving up (default: 64)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::services::link_service::DEFAULT_MAX_ATTEMPTS;

/// Upper bound accepted for `CODE_MAX_ATTEMPTS`.
const MAX_CODE_ATTEMPTS: usize = 100_000;

/// Where the mapping set is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// JSON document at `DB_FILE`.
    File,
    /// Process memory only; lost on restart.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "file" | "json" => Ok(StorageBackend::File),
            "memory" | "mem" => Ok(StorageBackend::Memory),
            other => anyhow::bail!("STORAGE must be 'file' or 'memory', got '{}'", other),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::File => f.write_str("file"),
            StorageBackend::Memory => f.write_str("memory"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_file: PathBuf,
    pub storage: StorageBackend,
    /// Directory served at `/static`; its `index.html` is served at `/`.
    pub static_dir: PathBuf,
    /// Public base URL for short links. When `None`, the request `Host` is used.
    pub base_url: Option<String>,
    pub code_max_attempts: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let db_file = env::var("DB_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("urls.json"));

        let storage = match env::var("STORAGE") {
            Ok(v) => v.parse().context("Invalid STORAGE")?,
            Err(_) => StorageBackend::File,
        };

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        let base_url = env::var("BASE_URL").ok().filter(|v| !v.trim().is_empty());

        let code_max_attempts = match env::var("CODE_MAX_ATTEMPTS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("CODE_MAX_ATTEMPTS must be a number, got '{}'", v))?,
            Err(_) => DEFAULT_MAX_ATTEMPTS,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            db_file,
            storage,
            static_dir,
            base_url,
            code_max_attempts,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `code_max_attempts` is outside 1..=100000
    /// - `base_url` is not an absolute http(s) URL
    /// - `db_file` is empty with file storage
    /// - `db_file` lies inside `static_dir`, which would publish it
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.code_max_attempts == 0 || self.code_max_attempts > MAX_CODE_ATTEMPTS {
            anyhow::bail!(
                "CODE_MAX_ATTEMPTS must be between 1 and {}, got {}",
                MAX_CODE_ATTEMPTS,
                self.code_max_attempts
            );
        }

        if let Some(ref base_url) = self.base_url
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                base_url
            );
        }

        if self.storage == StorageBackend::File && self.db_file.as_os_str().is_empty() {
            anyhow::bail!("DB_FILE must not be empty when STORAGE=file");
        }

        if self.storage == StorageBackend::File && is_within(&self.db_file, &self.static_dir)? {
            anyhow::bail!(
                "DB_FILE '{}' must not be inside STATIC_DIR '{}'",
                self.db_file.display(),
                self.static_dir.display()
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        match self.storage {
            StorageBackend::File => {
                tracing::info!("  Storage: file ({})", self.db_file.display())
            }
            StorageBackend::Memory => tracing::info!("  Storage: memory (not persisted)"),
        }
        tracing::info!("  Static dir: {}", self.static_dir.display());
        tracing::info!(
            "  Base URL: {}",
            self.base_url.as_deref().unwrap_or("(from Host header)")
        );
        tracing::info!("  Code max attempts: {}", self.code_max_attempts);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Returns true if `path` is `dir` or lies below it.
///
/// Both are made absolute against the working directory and compared
/// component-wise; `.` components are dropped, `..` is resolved lexically.
fn is_within(path: &Path, dir: &Path) -> Result<bool> {
    let path = normalize(&std::path::absolute(path).context("Invalid DB_FILE path")?);
    let dir = normalize(&std::path::absolute(dir).context("Invalid STATIC_DIR path")?);
    Ok(path.starts_with(dir))
}

fn normalize(path: &Path) -> PathBuf {
    use std::path::Component;

    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
