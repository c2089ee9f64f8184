use omanculture_core::view::category::{CategoryEvent, CategoryView};
use omanculture_core::view::detail::{DetailEvent, DetailView};
use omanculture_core::view::favorites::FavoritesView;
use omanculture_core::view::home::{HomeEvent, HomeView};
use omanculture_core::{
    Catalogue, Category, FavoriteSet, FavoritesStore, FigureId, FigureService, Language,
    SqliteKeyValueRepository,
};
use std::sync::Arc;

fn service() -> FigureService {
    FigureService::new(Arc::new(Catalogue::seed()))
}

fn favorites_store() -> FavoritesStore<SqliteKeyValueRepository> {
    FavoritesStore::open(Arc::new(SqliteKeyValueRepository::open_in_memory().unwrap()))
}

#[test]
fn home_combines_search_and_category_conjunctively() {
    let service = service();
    let mut view = HomeView::new(service.clone());
    view.dispatch(HomeEvent::Loaded);

    view.dispatch(HomeEvent::SearchChanged("sultan".to_string()));
    assert_eq!(view.state().filtered_figures.len(), 3);

    let state = view.dispatch(HomeEvent::CategorySelected(Some(Category::Sports)));
    assert!(state.filtered_figures.is_empty());

    let state = view.dispatch(HomeEvent::CategorySelected(Some(Category::HistoricalLeaders)));
    let ids = state.filtered_figures.iter().map(|f| f.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 2, 3]);

    let state = view.dispatch(HomeEvent::SearchChanged(String::new()));
    assert_eq!(
        state.filtered_figures.len(),
        service.by_category(Category::HistoricalLeaders).len()
    );

    let state = view.dispatch(HomeEvent::CategorySelected(None));
    assert_eq!(state.filtered_figures.len(), service.all().len());
}

#[test]
fn home_tracks_language_and_favorites_without_touching_lists() {
    let store = favorites_store();
    let mut receiver = store.observe();
    let mut view = HomeView::new(service());
    view.dispatch(HomeEvent::Loaded);
    let before = view.state().filtered_figures.clone();

    assert!(!view.sync_favorites(&mut receiver));
    store.toggle(2).unwrap();
    assert!(view.sync_favorites(&mut receiver));
    assert_eq!(view.state().favorite_ids, FavoriteSet::from([2]));

    view.dispatch(HomeEvent::LanguageChanged(Language::Arabic));
    assert_eq!(view.state().language, Language::Arabic);
    assert_eq!(view.state().filtered_figures, before);
}

#[test]
fn favorites_view_follows_store_commits() {
    let store = favorites_store();
    store.add(14).unwrap();
    store.add(1).unwrap();

    let mut receiver = store.observe();
    let mut view = FavoritesView::new(service());
    let ids = view
        .load_from(&mut receiver)
        .favorites
        .iter()
        .map(|figure| figure.id)
        .collect::<Vec<FigureId>>();
    assert_eq!(ids, vec![1, 14]);

    store.clear_all().unwrap();
    assert!(view.sync_favorites(&mut receiver));
    assert!(view.state().favorites.is_empty());
    assert!(!view.state().is_loading);
}

#[test]
fn detail_and_category_views_derive_from_catalogue() {
    let mut detail = DetailView::new(service());
    let state = detail.dispatch(DetailEvent::Load(13));
    assert_eq!(state.figure.as_ref().map(|f| f.id), Some(13));
    let state = detail.dispatch(DetailEvent::TabSelected(2));
    assert_eq!(state.selected_tab, 2);
    assert_eq!(state.figure.as_ref().map(|f| f.id), Some(13));

    let mut category = CategoryView::new(service());
    let state = category.dispatch(CategoryEvent::Open("artists".to_string()));
    let ids = state.figures.iter().map(|f| f.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![6, 14]);
}

#[test]
fn detail_and_category_views_sync_favorites_from_store() {
    let store = favorites_store();
    let mut detail_receiver = store.observe();
    let mut category_receiver = store.observe();

    let mut detail = DetailView::new(service());
    detail.dispatch(DetailEvent::Load(6));
    let mut category = CategoryView::new(service());
    category.dispatch(CategoryEvent::Open("artists".to_string()));

    assert!(!detail.sync_favorites(&mut detail_receiver));
    assert!(!category.sync_favorites(&mut category_receiver));

    store.toggle(6).unwrap();
    assert!(detail.sync_favorites(&mut detail_receiver));
    assert!(detail.state().is_favorite);
    assert!(category.sync_favorites(&mut category_receiver));
    assert_eq!(category.state().favorite_ids, FavoriteSet::from([6]));

    store.toggle(6).unwrap();
    assert!(detail.sync_favorites(&mut detail_receiver));
    assert!(!detail.state().is_favorite);
    assert!(!detail.sync_favorites(&mut detail_receiver));
}
