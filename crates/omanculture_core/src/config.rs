//! Runtime configuration resolved from the environment.
//!
//! # Responsibility
//! - Resolve database, bundled-document and logging locations.
//!
//! # Invariants
//! - Blank variables are treated as unset.
//! - Resolution never fails; every setting has a default or is optional.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "OMAN_CULTURE_DB_PATH";
pub const FIGURES_PATH_ENV: &str = "OMAN_CULTURE_FIGURES_PATH";
pub const LOG_LEVEL_ENV: &str = "OMAN_CULTURE_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "OMAN_CULTURE_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "omanculture.sqlite3";

/// Core settings shared by the FFI layer and tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Settings database file.
    pub db_path: PathBuf,
    /// Bundled figures document. `None` means seed data only.
    pub figures_path: Option<PathBuf>,
    pub log_level: String,
    /// Log directory. Logging stays off unless the embedder provides one.
    pub log_dir: Option<PathBuf>,
}

impl CoreConfig {
    /// Resolves configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration through an injected variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: read(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)),
            figures_path: read(FIGURES_PATH_ENV).map(PathBuf::from),
            log_level: read(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(LOG_DIR_ENV).map(PathBuf::from),
        }
    }
}
