use omanculture_core::{Language, PreferencesStore, SqliteKeyValueRepository};
use std::path::Path;
use std::sync::Arc;

fn open_store(path: &Path) -> PreferencesStore<SqliteKeyValueRepository> {
    PreferencesStore::new(Arc::new(SqliteKeyValueRepository::open(path).unwrap()))
}

#[test]
fn settings_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.db");
    {
        let store = open_store(&path);
        assert!(!store.onboarding_completed().unwrap());
        assert_eq!(store.language().unwrap(), Language::English);

        store.complete_onboarding().unwrap();
        store.set_language(Language::Arabic).unwrap();
        store.set_dark_mode(true).unwrap();
    }

    let reopened = open_store(&path);
    let snapshot = reopened.snapshot().unwrap();
    assert!(snapshot.onboarding_completed);
    assert_eq!(snapshot.language, Language::Arabic);
    assert!(snapshot.dark_mode);
}

#[test]
fn reads_reflect_latest_write() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir.path().join("settings.db"));

    store.set_language(Language::Arabic).unwrap();
    store.set_language(Language::English).unwrap();
    assert_eq!(store.language().unwrap(), Language::English);

    store.set_dark_mode(true).unwrap();
    store.set_dark_mode(false).unwrap();
    assert!(!store.dark_mode().unwrap());
}

#[test]
fn preferences_and_favorites_share_one_database() {
    let dir = tempfile::tempdir().unwrap();
    let repo = Arc::new(SqliteKeyValueRepository::open(dir.path().join("settings.db")).unwrap());
    let preferences = PreferencesStore::new(Arc::clone(&repo));
    let favorites = omanculture_core::FavoritesStore::open(Arc::clone(&repo));

    preferences.set_language(Language::Arabic).unwrap();
    favorites.add(10).unwrap();
    preferences.complete_onboarding().unwrap();

    assert_eq!(preferences.language().unwrap(), Language::Arabic);
    assert!(favorites.is_favorite(10));
}
