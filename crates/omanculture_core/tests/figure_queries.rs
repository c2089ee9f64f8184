use omanculture_core::view::home::apply_filters;
use omanculture_core::{Catalogue, Category, FigureId, FigureService};
use std::collections::BTreeSet;
use std::sync::Arc;

fn service() -> FigureService {
    FigureService::new(Arc::new(Catalogue::seed()))
}

fn ids<'a>(figures: impl IntoIterator<Item = &'a omanculture_core::Figure>) -> Vec<FigureId> {
    figures.into_iter().map(|figure| figure.id).collect()
}

#[test]
fn by_id_finds_every_catalogue_entry_and_misses_unknown_ids() {
    let service = service();
    for figure in service.all() {
        let found = service.by_id(figure.id).unwrap();
        assert_eq!(found, figure);
    }
    assert!(service.by_id(-1).is_none());
    assert!(service.by_id(10_000).is_none());
}

#[test]
fn by_ids_handles_empty_and_full_inputs() {
    let service = service();
    assert!(service.by_ids(&[]).is_empty());

    let all_ids = ids(service.all());
    let mut reversed = all_ids.clone();
    reversed.reverse();
    let result = service.by_ids(&reversed);
    assert_eq!(ids(result), all_ids);
}

#[test]
fn by_category_preserves_catalogue_order() {
    let service = service();
    for category in Category::ALL {
        let expected = ids(service.all().iter().filter(|f| f.category == category));
        assert_eq!(ids(service.by_category(category)), expected);
    }
}

#[test]
fn english_search_ignores_case() {
    let service = service();
    let lower = ids(service.search("qaboos"));
    let title = ids(service.search("Qaboos"));
    let upper = ids(service.search("QABOOS"));
    assert_eq!(lower, vec![1]);
    assert_eq!(lower, title);
    assert_eq!(lower, upper);
}

#[test]
fn search_covers_english_descriptions() {
    let service = service();
    let hits = ids(service.search("poet laureate"));
    assert!(!hits.is_empty());
    for id in hits {
        let figure = service.by_id(id).unwrap();
        assert!(figure.description_en.to_lowercase().contains("poet laureate"));
    }
}

#[test]
fn featured_is_first_figure_and_categories_follow_declaration_order() {
    let service = service();
    assert_eq!(service.featured().unwrap().id, service.all()[0].id);
    assert_eq!(
        service.categories().iter().map(|c| c.id()).collect::<Vec<_>>(),
        vec![
            "historical_leaders",
            "poets_writers",
            "artists",
            "sports",
            "scholars",
            "modern"
        ]
    );
}

#[test]
fn category_filter_over_search_equals_intersection() {
    let service = service();
    let queries = ["sultan", "omani", "poet", "al-", "عُمان", "zzz", "a"];

    for query in queries {
        for category in Category::ALL {
            let filtered: BTreeSet<FigureId> =
                ids(apply_filters(service.search(query), Some(category)))
                    .into_iter()
                    .collect();
            let searched: BTreeSet<FigureId> = ids(service.search(query)).into_iter().collect();
            let in_category: BTreeSet<FigureId> =
                ids(service.by_category(category)).into_iter().collect();
            let intersection = searched
                .intersection(&in_category)
                .copied()
                .collect::<BTreeSet<_>>();
            assert_eq!(filtered, intersection, "query={query} category={}", category.id());
        }
    }
}
