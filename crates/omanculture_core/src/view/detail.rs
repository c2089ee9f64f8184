//! Detail screen state for one figure.

use crate::model::codec::FavoriteSet;
use crate::model::figure::{Figure, FigureId};
use crate::service::figure_service::FigureService;
use crate::view::take_favorites_update;
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    pub figure_id: Option<FigureId>,
    /// `None` after loading means the id is not in the catalogue.
    pub figure: Option<Figure>,
    pub is_loading: bool,
    pub is_favorite: bool,
    pub selected_tab: usize,
}

impl Default for DetailState {
    fn default() -> Self {
        Self {
            figure_id: None,
            figure: None,
            is_loading: true,
            is_favorite: false,
            selected_tab: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEvent {
    Load(FigureId),
    FavoritesChanged(FavoriteSet),
    TabSelected(usize),
}

pub fn reduce(service: &FigureService, state: DetailState, event: DetailEvent) -> DetailState {
    match event {
        DetailEvent::Load(id) => DetailState {
            figure_id: Some(id),
            figure: service.by_id(id).cloned(),
            is_loading: false,
            ..state
        },
        DetailEvent::FavoritesChanged(ids) => DetailState {
            is_favorite: state.figure_id.is_some_and(|id| ids.contains(&id)),
            ..state
        },
        DetailEvent::TabSelected(tab) => DetailState {
            selected_tab: tab,
            ..state
        },
    }
}

#[derive(Debug, Clone)]
pub struct DetailView {
    service: FigureService,
    state: DetailState,
}

impl DetailView {
    pub fn new(service: FigureService) -> Self {
        Self {
            service,
            state: DetailState::default(),
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn dispatch(&mut self, event: DetailEvent) -> &DetailState {
        let current = std::mem::take(&mut self.state);
        self.state = reduce(&self.service, current, event);
        &self.state
    }

    /// Applies a pending favorites commit, if any. Returns whether one applied.
    pub fn sync_favorites(&mut self, receiver: &mut watch::Receiver<FavoriteSet>) -> bool {
        match take_favorites_update(receiver) {
            Some(ids) => {
                self.dispatch(DetailEvent::FavoritesChanged(ids));
                true
            }
            None => false,
        }
    }
}
