use omanculture_core::catalogue::{self, FiguresDocument};
use omanculture_core::{Catalogue, CatalogueSource, Category, FigureService};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;

fn record(id: i32, name_en: &str, category: &str) -> serde_json::Value {
    json!({
        "id": id,
        "nameEn": name_en,
        "nameAr": "اسم",
        "category": category,
        "imageUrl": "https://example.com/figure.png",
        "descriptionEn": format!("{name_en} description"),
        "descriptionAr": "وصف",
        "biographyEn": "Biography",
        "biographyAr": "سيرة",
        "achievementsEn": ["First", "Second"],
        "achievementsAr": ["الأول", "الثاني"],
        "era": "1900-Present",
        "yearsActive": 10,
        "worksCount": 2
    })
}

fn write_document(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("figures.json");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn bundled_document_resolves_categories_and_defaults_unknown_to_modern() {
    let dir = tempfile::tempdir().unwrap();
    let document = json!({
        "figures": [
            record(100, "Known Poet", "poets_writers"),
            record(101, "Declared Athlete", "SPORTS"),
            record(102, "Mystery Person", "astronauts"),
        ]
    });
    let path = write_document(dir.path(), &document.to_string());

    let catalogue = Catalogue::load(Some(&path));
    assert_eq!(catalogue.source(), CatalogueSource::Bundled);
    let service = FigureService::new(Arc::new(catalogue));

    let poets = service.by_category(Category::PoetsWriters);
    assert!(poets.iter().any(|figure| figure.id == 100));
    let sports = service.by_category(Category::Sports);
    assert!(sports.iter().any(|figure| figure.id == 101));
    let modern = service.by_category(Category::Modern);
    assert!(modern.iter().any(|figure| figure.id == 102));
}

#[test]
fn bundled_document_keeps_authoring_order_and_fields() {
    let dir = tempfile::tempdir().unwrap();
    let document = json!({
        "figures": [record(7, "Zed", "artists"), record(3, "Amy", "scholars")]
    });
    let path = write_document(dir.path(), &document.to_string());

    let catalogue = Catalogue::from_json_file(&path).unwrap();
    let ids = catalogue.figures().iter().map(|f| f.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![7, 3]);

    let first = &catalogue.figures()[0];
    assert_eq!(first.achievements_en, vec!["First", "Second"]);
    assert_eq!(first.years_active, 10);
    assert_eq!(first.works_count, 2);
}

#[test]
fn malformed_document_falls_back_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_document(dir.path(), "{\"figures\": [ {\"id\": \"oops\" ");

    let catalogue = Catalogue::load(Some(&path));
    assert_eq!(catalogue.source(), CatalogueSource::Seed);
    assert_eq!(catalogue.figures(), Catalogue::seed().figures());
}

#[test]
fn wrong_wrapper_shape_falls_back_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_document(dir.path(), &json!([record(1, "Bare", "modern")]).to_string());

    let catalogue = Catalogue::load(Some(&path));
    assert_eq!(catalogue.source(), CatalogueSource::Seed);
}

#[test]
fn absent_path_uses_seed() {
    let catalogue = Catalogue::load(None);
    assert_eq!(catalogue.source(), CatalogueSource::Seed);
    assert_eq!(catalogue.len(), 20);
}

#[test]
fn document_round_trips_through_schema_types() {
    let raw = json!({ "figures": [record(5, "Round", "modern")] }).to_string();
    let parsed: FiguresDocument = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.figures[0].name_en, "Round");
    assert_eq!(parsed.figures[0].category, "modern");
}

#[test]
fn shared_catalogue_is_loaded_once() {
    let first = catalogue::shared(None);
    let dir = tempfile::tempdir().unwrap();
    let path = write_document(
        dir.path(),
        &json!({ "figures": [record(900, "Late", "modern")] }).to_string(),
    );

    let second = catalogue::shared(Some(&path));
    assert!(Arc::ptr_eq(&first, &second));
    assert!(catalogue::shared_if_loaded().is_some());
}
