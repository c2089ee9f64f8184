//! Preferences store for scalar settings.
//!
//! # Responsibility
//! - Persist onboarding completion, interface language and theme.
//!
//! # Invariants
//! - Every setter commits before returning; getters read committed state.
//! - Missing or undecodable values read as their defaults.
//! - Settings are independent; no cross-key transaction is used.

use crate::model::codec::KvCodec;
use crate::model::language::Language;
use crate::repo::kv_repo::{read_typed, write_typed, KeyValueRepository, KvKey};
use crate::store::StoreResult;
use log::{error, info};
use std::sync::Arc;

const ONBOARDING_NAMESPACE: &str = "oman_culture_onboarding";
const SETTINGS_NAMESPACE: &str = "settings";

pub const ONBOARDING_COMPLETED_KEY: KvKey =
    KvKey::new(ONBOARDING_NAMESPACE, "onboarding_completed");
pub const SELECTED_LANGUAGE_KEY: KvKey = KvKey::new(ONBOARDING_NAMESPACE, "selected_language");
pub const DARK_MODE_KEY: KvKey = KvKey::new(SETTINGS_NAMESPACE, "dark_mode");

/// Snapshot of all scalar settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub onboarding_completed: bool,
    pub language: Language,
    pub dark_mode: bool,
}

/// Typed accessors over the preferences namespaces.
pub struct PreferencesStore<R: KeyValueRepository> {
    repo: Arc<R>,
}

impl<R: KeyValueRepository> PreferencesStore<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub fn onboarding_completed(&self) -> StoreResult<bool> {
        self.read_or_default(ONBOARDING_COMPLETED_KEY)
    }

    pub fn set_onboarding_completed(&self, completed: bool) -> StoreResult<()> {
        self.write(ONBOARDING_COMPLETED_KEY, &completed)
    }

    pub fn complete_onboarding(&self) -> StoreResult<()> {
        self.set_onboarding_completed(true)
    }

    /// Clears onboarding completion. Intended for debugging.
    pub fn reset_onboarding(&self) -> StoreResult<()> {
        self.set_onboarding_completed(false)
    }

    pub fn language(&self) -> StoreResult<Language> {
        self.read_or_default(SELECTED_LANGUAGE_KEY)
    }

    pub fn set_language(&self, language: Language) -> StoreResult<()> {
        self.write(SELECTED_LANGUAGE_KEY, &language)
    }

    pub fn dark_mode(&self) -> StoreResult<bool> {
        self.read_or_default(DARK_MODE_KEY)
    }

    pub fn set_dark_mode(&self, enabled: bool) -> StoreResult<()> {
        self.write(DARK_MODE_KEY, &enabled)
    }

    /// Reads every setting.
    pub fn snapshot(&self) -> StoreResult<Preferences> {
        Ok(Preferences {
            onboarding_completed: self.onboarding_completed()?,
            language: self.language()?,
            dark_mode: self.dark_mode()?,
        })
    }

    fn read_or_default<T: KvCodec + Default>(&self, key: KvKey) -> StoreResult<T> {
        let value = read_typed::<T, _>(self.repo.as_ref(), key)?;
        Ok(value.unwrap_or_default())
    }

    fn write<T: KvCodec>(&self, key: KvKey, value: &T) -> StoreResult<()> {
        match write_typed(self.repo.as_ref(), key, value) {
            Ok(()) => {
                info!(
                    "event=preference_set module=store status=ok namespace={} key={}",
                    key.namespace, key.name
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=preference_set module=store status=error namespace={} key={} error={}",
                    key.namespace, key.name, err
                );
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Preferences, PreferencesStore, SELECTED_LANGUAGE_KEY};
    use crate::model::language::Language;
    use crate::repo::kv_repo::{KeyValueRepository, SqliteKeyValueRepository};
    use std::sync::Arc;

    #[test]
    fn defaults_apply_to_empty_store() {
        let repo = Arc::new(SqliteKeyValueRepository::open_in_memory().unwrap());
        let store = PreferencesStore::new(repo);
        assert_eq!(store.snapshot().unwrap(), Preferences::default());
    }

    #[test]
    fn unknown_language_code_reads_as_english() {
        let repo = Arc::new(SqliteKeyValueRepository::open_in_memory().unwrap());
        repo.put(SELECTED_LANGUAGE_KEY, "fr").unwrap();
        let store = PreferencesStore::new(repo);
        assert_eq!(store.language().unwrap(), Language::English);
    }

    #[test]
    fn onboarding_can_be_reset() {
        let repo = Arc::new(SqliteKeyValueRepository::open_in_memory().unwrap());
        let store = PreferencesStore::new(repo);
        store.complete_onboarding().unwrap();
        assert!(store.onboarding_completed().unwrap());
        store.reset_onboarding().unwrap();
        assert!(!store.onboarding_completed().unwrap());
    }
}
