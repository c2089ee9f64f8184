//! Core domain logic for the Omani figures catalogue app.
//! This crate is the single source of truth for catalogue data, queries,
//! persisted settings and per-screen view state.

pub mod catalogue;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod view;

pub use catalogue::{Catalogue, CatalogueError, CatalogueSource};
pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::category::Category;
pub use model::codec::FavoriteSet;
pub use model::figure::{Figure, FigureId};
pub use model::language::Language;
pub use repo::kv_repo::{KeyValueRepository, KvKey, RepoError, RepoResult, SqliteKeyValueRepository};
pub use service::figure_service::FigureService;
pub use store::favorites::{FavoriteFlag, FavoritesStore};
pub use store::preferences::{Preferences, PreferencesStore};
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
