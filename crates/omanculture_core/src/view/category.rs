//! Category screen state, opened from a `category/{categoryId}` route.

use crate::model::category::Category;
use crate::model::codec::FavoriteSet;
use crate::model::figure::Figure;
use crate::service::figure_service::FigureService;
use crate::view::take_favorites_update;
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryState {
    pub route_id: String,
    /// `None` when the route id names no category.
    pub category: Option<Category>,
    pub figures: Vec<Figure>,
    pub favorite_ids: FavoriteSet,
    pub is_loading: bool,
}

impl Default for CategoryState {
    fn default() -> Self {
        Self {
            route_id: String::new(),
            category: None,
            figures: Vec::new(),
            favorite_ids: FavoriteSet::new(),
            is_loading: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryEvent {
    Open(String),
    FavoritesChanged(FavoriteSet),
}

pub fn reduce(service: &FigureService, state: CategoryState, event: CategoryEvent) -> CategoryState {
    match event {
        CategoryEvent::Open(route_id) => {
            let category = Category::from_id(&route_id);
            let figures = category
                .map(|category| service.by_category(category).into_iter().cloned().collect())
                .unwrap_or_default();
            CategoryState {
                route_id,
                category,
                figures,
                is_loading: false,
                ..state
            }
        }
        CategoryEvent::FavoritesChanged(ids) => CategoryState {
            favorite_ids: ids,
            ..state
        },
    }
}

#[derive(Debug, Clone)]
pub struct CategoryView {
    service: FigureService,
    state: CategoryState,
}

impl CategoryView {
    pub fn new(service: FigureService) -> Self {
        Self {
            service,
            state: CategoryState::default(),
        }
    }

    pub fn state(&self) -> &CategoryState {
        &self.state
    }

    pub fn dispatch(&mut self, event: CategoryEvent) -> &CategoryState {
        let current = std::mem::take(&mut self.state);
        self.state = reduce(&self.service, current, event);
        &self.state
    }

    /// Applies a pending favorites commit, if any. Returns whether one applied.
    pub fn sync_favorites(&mut self, receiver: &mut watch::Receiver<FavoriteSet>) -> bool {
        match take_favorites_update(receiver) {
            Some(ids) => {
                self.dispatch(CategoryEvent::FavoritesChanged(ids));
                true
            }
            None => false,
        }
    }
}
