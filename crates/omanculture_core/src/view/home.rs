//! Home screen state: full list with search and category filters.
//!
//! # Invariants
//! - Search and category filters are conjunctive.
//! - A blank query (whitespace only) disables search filtering.
//! - `filtered_figures` is always re-derived from `figures`, never patched.

use crate::model::category::Category;
use crate::model::codec::FavoriteSet;
use crate::model::figure::Figure;
use crate::model::language::Language;
use crate::service::figure_service::FigureService;
use crate::view::take_favorites_update;
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeState {
    pub figures: Vec<Figure>,
    pub filtered_figures: Vec<Figure>,
    pub categories: Vec<Category>,
    pub selected_category: Option<Category>,
    pub search_query: String,
    pub is_loading: bool,
    pub favorite_ids: FavoriteSet,
    pub language: Language,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            figures: Vec::new(),
            filtered_figures: Vec::new(),
            categories: Vec::new(),
            selected_category: None,
            search_query: String::new(),
            is_loading: true,
            favorite_ids: FavoriteSet::new(),
            language: Language::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeEvent {
    /// Catalogue became available.
    Loaded,
    SearchChanged(String),
    /// `None` clears the category filter.
    CategorySelected(Option<Category>),
    FavoritesChanged(FavoriteSet),
    LanguageChanged(Language),
}

/// Keeps figures of `category`, or all of them when no category is selected.
pub fn apply_filters<'a>(
    figures: impl IntoIterator<Item = &'a Figure>,
    category: Option<Category>,
) -> Vec<&'a Figure> {
    figures
        .into_iter()
        .filter(|figure| category.map_or(true, |selected| figure.category == selected))
        .collect()
}

/// Figures matching both the search query and the category selection.
pub fn filter_figures<'a>(
    service: &'a FigureService,
    query: &str,
    category: Option<Category>,
) -> Vec<&'a Figure> {
    if query.trim().is_empty() {
        apply_filters(service.all(), category)
    } else {
        apply_filters(service.search(query), category)
    }
}

pub fn reduce(service: &FigureService, state: HomeState, event: HomeEvent) -> HomeState {
    let mut next = state;
    match event {
        HomeEvent::Loaded => {
            next.figures = service.all().to_vec();
            next.categories = service.categories().to_vec();
            next.is_loading = false;
        }
        HomeEvent::SearchChanged(query) => next.search_query = query,
        HomeEvent::CategorySelected(category) => next.selected_category = category,
        HomeEvent::FavoritesChanged(ids) => {
            next.favorite_ids = ids;
            return next;
        }
        HomeEvent::LanguageChanged(language) => {
            next.language = language;
            return next;
        }
    }

    if !next.is_loading {
        next.filtered_figures =
            filter_figures(service, &next.search_query, next.selected_category)
                .into_iter()
                .cloned()
                .collect();
    }
    next
}

/// Holder owning the current home state.
#[derive(Debug, Clone)]
pub struct HomeView {
    service: FigureService,
    state: HomeState,
}

impl HomeView {
    pub fn new(service: FigureService) -> Self {
        Self {
            service,
            state: HomeState::default(),
        }
    }

    pub fn state(&self) -> &HomeState {
        &self.state
    }

    pub fn dispatch(&mut self, event: HomeEvent) -> &HomeState {
        let current = std::mem::take(&mut self.state);
        self.state = reduce(&self.service, current, event);
        &self.state
    }

    /// Applies a pending favorites commit, if any. Returns whether one applied.
    pub fn sync_favorites(&mut self, receiver: &mut watch::Receiver<FavoriteSet>) -> bool {
        match take_favorites_update(receiver) {
            Some(ids) => {
                self.dispatch(HomeEvent::FavoritesChanged(ids));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{reduce, HomeEvent, HomeState};
    use crate::catalogue::Catalogue;
    use crate::model::category::Category;
    use crate::service::figure_service::FigureService;
    use std::sync::Arc;

    fn loaded(service: &FigureService) -> HomeState {
        reduce(service, HomeState::default(), HomeEvent::Loaded)
    }

    #[test]
    fn loaded_state_lists_everything() {
        let service = FigureService::new(Arc::new(Catalogue::seed()));
        let state = loaded(&service);
        assert!(!state.is_loading);
        assert_eq!(state.filtered_figures.len(), service.all().len());
        assert_eq!(state.categories, Category::ALL.to_vec());
    }

    #[test]
    fn blank_query_keeps_category_filter_only() {
        let service = FigureService::new(Arc::new(Catalogue::seed()));
        let state = loaded(&service);
        let state = reduce(
            &service,
            state,
            HomeEvent::CategorySelected(Some(Category::Sports)),
        );
        let state = reduce(&service, state, HomeEvent::SearchChanged("   ".to_string()));
        assert_eq!(
            state.filtered_figures.len(),
            service.by_category(Category::Sports).len()
        );
    }

    #[test]
    fn events_before_load_do_not_derive_lists() {
        let service = FigureService::new(Arc::new(Catalogue::seed()));
        let state = reduce(
            &service,
            HomeState::default(),
            HomeEvent::SearchChanged("qaboos".to_string()),
        );
        assert!(state.is_loading);
        assert!(state.filtered_figures.is_empty());

        let state = reduce(&service, state, HomeEvent::Loaded);
        assert_eq!(state.filtered_figures.len(), 1);
    }
}
