//! Immutable figure catalogue and its loaders.
//!
//! # Responsibility
//! - Load figures from the bundled document, falling back to seed data.
//! - Memoize the loaded catalogue for the process lifetime.
//!
//! # Invariants
//! - A loaded catalogue is never empty and never mutated.
//! - The soft loader never surfaces an error to the caller.
//! - `shared` parses at most once per process; concurrent first callers block
//!   until that single load completes.

use crate::model::figure::Figure;
use log::{info, warn};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

pub mod document;
mod seed;

pub use document::{FigureRecord, FiguresDocument};
pub use seed::seed_figures;

static SHARED_CATALOGUE: OnceCell<Arc<Catalogue>> = OnceCell::new();

pub type CatalogueResult<T> = Result<T, CatalogueError>;

/// Strict-loader error. Only visible through `from_json_*`.
#[derive(Debug)]
pub enum CatalogueError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// The document parsed but holds no figures.
    Empty,
}

impl Display for CatalogueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read figures document: {err}"),
            Self::Parse(err) => write!(f, "malformed figures document: {err}"),
            Self::Empty => write!(f, "figures document contains no figures"),
        }
    }
}

impl Error for CatalogueError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Empty => None,
        }
    }
}

impl From<std::io::Error> for CatalogueError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CatalogueError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Where the loaded figures came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogueSource {
    Bundled,
    Seed,
}

impl CatalogueSource {
    fn as_str(self) -> &'static str {
        match self {
            Self::Bundled => "bundled",
            Self::Seed => "seed",
        }
    }
}

/// Authoritative, read-only figure list in authoring order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    figures: Vec<Figure>,
    source: CatalogueSource,
}

impl Catalogue {
    /// Builds the catalogue from built-in seed data.
    pub fn seed() -> Self {
        Self {
            figures: seed_figures(),
            source: CatalogueSource::Seed,
        }
    }

    /// Parses a bundled document. Fails on malformed or empty documents.
    pub fn from_json_str(json: &str) -> CatalogueResult<Self> {
        let document: FiguresDocument = serde_json::from_str(json)?;
        if document.figures.is_empty() {
            return Err(CatalogueError::Empty);
        }

        let figures = document
            .figures
            .into_iter()
            .map(FigureRecord::into_figure)
            .collect();
        Ok(Self {
            figures,
            source: CatalogueSource::Bundled,
        })
    }

    /// Reads and parses a bundled document from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> CatalogueResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Loads the bundled document at `path`, or seed data when it is absent,
    /// unreadable or malformed.
    ///
    /// # Side effects
    /// - Performs a blocking file read.
    /// - Emits `catalogue_load` events with source and duration.
    pub fn load(path: Option<&Path>) -> Self {
        let started_at = Instant::now();
        info!("event=catalogue_load module=catalogue status=start");

        let catalogue = match path {
            Some(path) => match Self::from_json_file(path) {
                Ok(catalogue) => catalogue,
                Err(err) => {
                    warn!(
                        "event=catalogue_load module=catalogue status=fallback error_code=bundled_unavailable error={}",
                        err
                    );
                    Self::seed()
                }
            },
            None => Self::seed(),
        };

        info!(
            "event=catalogue_load module=catalogue status=ok source={} count={} duration_ms={}",
            catalogue.source.as_str(),
            catalogue.figures.len(),
            started_at.elapsed().as_millis()
        );
        catalogue
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn source(&self) -> CatalogueSource {
        self.source
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }
}

/// Returns the process-wide catalogue, loading it on first use.
///
/// `path` is only consulted by the first caller; later calls return the
/// memoized catalogue unchanged.
pub fn shared(path: Option<&Path>) -> Arc<Catalogue> {
    SHARED_CATALOGUE
        .get_or_init(|| Arc::new(Catalogue::load(path)))
        .clone()
}

/// Returns the process-wide catalogue if it has been loaded.
pub fn shared_if_loaded() -> Option<Arc<Catalogue>> {
    SHARED_CATALOGUE.get().cloned()
}

#[cfg(test)]
mod tests {
    use super::{Catalogue, CatalogueError, CatalogueSource};

    #[test]
    fn empty_document_is_rejected_by_strict_loader() {
        let err = Catalogue::from_json_str(r#"{"figures": []}"#).unwrap_err();
        assert!(matches!(err, CatalogueError::Empty));
    }

    #[test]
    fn missing_file_falls_back_to_seed() {
        let dir = tempfile::tempdir().unwrap();
        let catalogue = Catalogue::load(Some(&dir.path().join("figures.json")));
        assert_eq!(catalogue.source(), CatalogueSource::Seed);
        assert!(!catalogue.is_empty());
    }
}
