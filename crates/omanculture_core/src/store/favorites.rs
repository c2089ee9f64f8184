//! Favorites store.
//!
//! # Responsibility
//! - Persist the favorite-id set under `favorites/favorite_ids`.
//! - Publish every committed set to observers through a watch channel.
//!
//! # Invariants
//! - Commit and publish happen under one lock, so observers see sets in
//!   commit order.
//! - `add`/`remove` are idempotent; `toggle` is a serialized
//!   read-modify-write and never loses a concurrent toggle.
//! - Ids are not validated against the catalogue; stale ids are kept.
//! - A failed read keeps observers at the empty set and is reported through
//!   `load_error` until a later read or commit succeeds.

use crate::model::codec::{FavoriteSet, KvCodec};
use crate::model::figure::FigureId;
use crate::repo::kv_repo::{read_typed, KeyValueRepository, KvKey, RepoError};
use crate::store::{StoreError, StoreResult};
use log::{debug, error, info};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

/// Persisted entry holding the favorite-id set.
pub const FAVORITE_IDS_KEY: KvKey = KvKey::new("favorites", "favorite_ids");

/// Durable, observable favorite-id set.
pub struct FavoritesStore<R: KeyValueRepository> {
    repo: Arc<R>,
    sender: watch::Sender<FavoriteSet>,
    commit_lock: Mutex<()>,
    load_error: Mutex<Option<String>>,
}

impl<R: KeyValueRepository> FavoritesStore<R> {
    /// Opens the store and publishes the persisted set.
    ///
    /// An unreadable store starts observers at the empty set and records the
    /// failure in [`FavoritesStore::load_error`]; [`FavoritesStore::reload`]
    /// retries the read.
    pub fn open(repo: Arc<R>) -> Self {
        let (initial, load_error) =
            match read_typed::<FavoriteSet, _>(repo.as_ref(), FAVORITE_IDS_KEY) {
                Ok(set) => (set.unwrap_or_default(), None),
                Err(err) => {
                    error!(
                        "event=favorites_open module=store status=error error_code=favorites_read_failed error={}",
                        err
                    );
                    (FavoriteSet::new(), Some(err.to_string()))
                }
            };
        if load_error.is_none() {
            info!(
                "event=favorites_open module=store status=ok count={}",
                initial.len()
            );
        }

        let (sender, _) = watch::channel(initial);
        Self {
            repo,
            sender,
            commit_lock: Mutex::new(()),
            load_error: Mutex::new(load_error),
        }
    }

    /// Message of the last failed read, while the published set may not
    /// reflect persisted favorites.
    pub fn load_error(&self) -> Option<String> {
        self.load_error
            .lock()
            .ok()
            .and_then(|slot| slot.clone())
    }

    pub fn is_degraded(&self) -> bool {
        self.load_error().is_some()
    }

    /// Subscribes to the current set and all later commits.
    pub fn observe(&self) -> watch::Receiver<FavoriteSet> {
        self.sender.subscribe()
    }

    /// Subscribes to the membership of one id.
    pub fn observe_favorite(&self, id: FigureId) -> FavoriteFlag {
        FavoriteFlag {
            id,
            receiver: self.sender.subscribe(),
        }
    }

    pub fn snapshot(&self) -> FavoriteSet {
        self.sender.borrow().clone()
    }

    pub fn is_favorite(&self, id: FigureId) -> bool {
        self.sender.borrow().contains(&id)
    }

    pub fn len(&self) -> usize {
        self.sender.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sender.borrow().is_empty()
    }

    pub fn add(&self, id: FigureId) -> StoreResult<()> {
        self.mutate("favorite_add", |set| {
            set.insert(id);
        })
        .map(|_| ())
    }

    pub fn remove(&self, id: FigureId) -> StoreResult<()> {
        self.mutate("favorite_remove", |set| {
            set.remove(&id);
        })
        .map(|_| ())
    }

    /// Flips membership of `id` and returns the committed membership.
    pub fn toggle(&self, id: FigureId) -> StoreResult<bool> {
        let committed = self.mutate("favorite_toggle", |set| {
            if !set.remove(&id) {
                set.insert(id);
            }
        })?;
        Ok(committed.contains(&id))
    }

    pub fn clear_all(&self) -> StoreResult<()> {
        self.mutate("favorites_clear", FavoriteSet::clear).map(|_| ())
    }

    /// Re-reads the persisted set and republishes it.
    ///
    /// A failed read leaves the published set untouched and keeps the store
    /// degraded.
    pub fn reload(&self) -> StoreResult<FavoriteSet> {
        let _guard = self.commit_lock.lock().map_err(|_| RepoError::LockPoisoned)?;
        let set = match read_typed::<FavoriteSet, _>(self.repo.as_ref(), FAVORITE_IDS_KEY) {
            Ok(set) => set.unwrap_or_default(),
            Err(err) => {
                self.set_load_error(Some(err.to_string()));
                return Err(err.into());
            }
        };
        self.set_load_error(None);
        self.sender.send_replace(set.clone());
        Ok(set)
    }

    fn set_load_error(&self, value: Option<String>) {
        if let Ok(mut slot) = self.load_error.lock() {
            *slot = value;
        }
    }

    fn mutate(
        &self,
        event: &'static str,
        change: impl Fn(&mut FavoriteSet),
    ) -> StoreResult<FavoriteSet> {
        let _guard = self.commit_lock.lock().map_err(|_| RepoError::LockPoisoned)?;

        let mut committed = FavoriteSet::new();
        let result = self.repo.update(FAVORITE_IDS_KEY, &mut |current| {
            let mut set = current.and_then(FavoriteSet::decode).unwrap_or_default();
            change(&mut set);
            let encoded = set.encode();
            committed = set;
            Some(encoded)
        });

        if let Err(err) = result {
            error!(
                "event={event} module=store status=error error_code=favorites_write_failed error={}",
                err
            );
            return Err(err.into());
        }

        debug!(
            "event={event} module=store status=ok count={}",
            committed.len()
        );
        // The commit read the persisted set, so the published one is current.
        self.set_load_error(None);
        self.sender.send_replace(committed.clone());
        Ok(committed)
    }
}

/// Membership view of one figure id.
#[derive(Debug, Clone)]
pub struct FavoriteFlag {
    id: FigureId,
    receiver: watch::Receiver<FavoriteSet>,
}

impl FavoriteFlag {
    pub fn id(&self) -> FigureId {
        self.id
    }

    /// Current membership.
    pub fn get(&self) -> bool {
        self.receiver.borrow().contains(&self.id)
    }

    /// Whether a commit happened since the last `mark_seen`.
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    /// Returns current membership and marks it as seen.
    pub fn mark_seen(&mut self) -> bool {
        self.receiver.borrow_and_update().contains(&self.id)
    }

    /// Waits for the next commit and returns the membership after it.
    pub async fn changed(&mut self) -> StoreResult<bool> {
        self.receiver
            .changed()
            .await
            .map_err(|_| StoreError::Closed)?;
        Ok(self.mark_seen())
    }
}
