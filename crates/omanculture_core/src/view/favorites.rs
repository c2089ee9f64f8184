//! Favorites screen state.
//!
//! # Invariants
//! - `favorites` follows catalogue order, not the order ids were added.
//! - Stale ids with no catalogue entry are skipped silently.

use crate::model::codec::FavoriteSet;
use crate::model::figure::{Figure, FigureId};
use crate::service::figure_service::FigureService;
use crate::view::take_favorites_update;
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoritesState {
    pub favorites: Vec<Figure>,
    pub is_loading: bool,
}

impl Default for FavoritesState {
    fn default() -> Self {
        Self {
            favorites: Vec::new(),
            is_loading: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesEvent {
    Loaded(FavoriteSet),
    FavoritesChanged(FavoriteSet),
}

pub fn reduce(service: &FigureService, state: FavoritesState, event: FavoritesEvent) -> FavoritesState {
    let (ids, finishes_loading) = match event {
        FavoritesEvent::Loaded(ids) => (ids, true),
        FavoritesEvent::FavoritesChanged(ids) => (ids, false),
    };
    let ids = ids.into_iter().collect::<Vec<FigureId>>();

    FavoritesState {
        favorites: service.by_ids(&ids).into_iter().cloned().collect(),
        is_loading: state.is_loading && !finishes_loading,
    }
}

#[derive(Debug, Clone)]
pub struct FavoritesView {
    service: FigureService,
    state: FavoritesState,
}

impl FavoritesView {
    pub fn new(service: FigureService) -> Self {
        Self {
            service,
            state: FavoritesState::default(),
        }
    }

    pub fn state(&self) -> &FavoritesState {
        &self.state
    }

    pub fn dispatch(&mut self, event: FavoritesEvent) -> &FavoritesState {
        let current = std::mem::take(&mut self.state);
        self.state = reduce(&self.service, current, event);
        &self.state
    }

    /// Loads from the receiver's current set and marks it seen.
    pub fn load_from(&mut self, receiver: &mut watch::Receiver<FavoriteSet>) -> &FavoritesState {
        let ids = receiver.borrow_and_update().clone();
        self.dispatch(FavoritesEvent::Loaded(ids))
    }

    pub fn sync_favorites(&mut self, receiver: &mut watch::Receiver<FavoriteSet>) -> bool {
        match take_favorites_update(receiver) {
            Some(ids) => {
                self.dispatch(FavoritesEvent::FavoritesChanged(ids));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{reduce, FavoritesEvent, FavoritesState};
    use crate::catalogue::Catalogue;
    use crate::model::codec::FavoriteSet;
    use crate::service::figure_service::FigureService;
    use std::sync::Arc;

    #[test]
    fn stale_ids_are_skipped_and_order_follows_catalogue() {
        let service = FigureService::new(Arc::new(Catalogue::seed()));
        let state = reduce(
            &service,
            FavoritesState::default(),
            FavoritesEvent::Loaded(FavoriteSet::from([9, 2, 9999])),
        );
        let ids = state.favorites.iter().map(|f| f.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![2, 9]);
        assert!(!state.is_loading);
    }
}
