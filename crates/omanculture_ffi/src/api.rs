//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose catalogue queries, favorites and preferences to Dart via FRB.
//! - Translate core errors into plain response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Catalogue queries never depend on the settings database; they always
//!   answer from the bundled document or the seed list.
//! - The settings context is built once per process from `CoreConfig`; a
//!   failed build is retried on the next call.

use log::warn;
use omanculture_core::catalogue;
use omanculture_core::view::home::filter_figures;
use omanculture_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    init_logging_from_config, Category, CoreConfig, FavoritesStore, Figure, FigureService,
    Language, PreferencesStore, SqliteKeyValueRepository,
};
use once_cell::sync::OnceCell;
use std::sync::Arc;

static CONFIG: OnceCell<CoreConfig> = OnceCell::new();
static FIGURES: OnceCell<FigureService> = OnceCell::new();
static SETTINGS: OnceCell<SettingsContext> = OnceCell::new();

struct SettingsContext {
    favorites: FavoritesStore<SqliteKeyValueRepository>,
    preferences: PreferencesStore<SqliteKeyValueRepository>,
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Flat figure record for list and detail rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureItem {
    pub id: i32,
    pub name_en: String,
    pub name_ar: String,
    /// Stable category identifier, e.g. `poets_writers`.
    pub category_id: String,
    pub image_url: String,
    pub description_en: String,
    pub description_ar: String,
    pub biography_en: String,
    pub biography_ar: String,
    pub achievements_en: Vec<String>,
    pub achievements_ar: Vec<String>,
    pub era: String,
    pub years_active: u32,
    pub works_count: u32,
}

/// Category metadata plus rendering hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryItem {
    pub id: String,
    pub display_name_en: String,
    pub display_name_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub icon: String,
    /// `primary|secondary|tertiary`.
    pub accent: String,
}

/// List response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiguresResponse {
    pub items: Vec<FigureItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Favorite membership after the call, when applicable.
    pub is_favorite: Option<bool>,
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            is_favorite: None,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            is_favorite: None,
            message: message.into(),
        }
    }
}

/// Preferences snapshot envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferencesResponse {
    pub ok: bool,
    pub onboarding_completed: bool,
    /// `en` or `ar`.
    pub language: String,
    pub dark_mode: bool,
    pub message: String,
}

/// Lists every figure in catalogue order.
#[flutter_rust_bridge::frb(sync)]
pub fn figures_all() -> FiguresResponse {
    list_response(to_items(figures().all()))
}

/// Returns one figure, or `None` when the id is unknown.
#[flutter_rust_bridge::frb(sync)]
pub fn figure_by_id(id: i32) -> Option<FigureItem> {
    figures().by_id(id).map(to_item)
}

/// Lists figures of one category identifier.
#[flutter_rust_bridge::frb(sync)]
pub fn figures_by_category(category_id: String) -> FiguresResponse {
    match parse_category(&category_id) {
        Ok(category) => list_response(to_items(figures().by_category(category))),
        Err(message) => error_list(message),
    }
}

/// Searches figures with home-screen semantics.
///
/// A blank `query` skips text matching; `category_id` narrows results when set.
#[flutter_rust_bridge::frb(sync)]
pub fn figures_search(query: String, category_id: Option<String>) -> FiguresResponse {
    let category = match category_id.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(id) => match parse_category(id) {
            Ok(category) => Some(category),
            Err(message) => return error_list(message),
        },
    };
    list_response(to_items(filter_figures(figures(), &query, category)))
}

/// Returns the featured figure.
#[flutter_rust_bridge::frb(sync)]
pub fn figure_featured() -> Option<FigureItem> {
    figures().featured().map(to_item)
}

/// Lists categories in declaration order.
#[flutter_rust_bridge::frb(sync)]
pub fn categories() -> Vec<CategoryItem> {
    Category::ALL.into_iter().map(to_category_item).collect()
}

/// Lists favorite figures in catalogue order.
///
/// Unreadable favorites yield no items and an error message, never a silent
/// empty list.
#[flutter_rust_bridge::frb(sync)]
pub fn favorites_list() -> FiguresResponse {
    match settings().and_then(favorites_ready) {
        Ok(ctx) => {
            let ids = ctx.favorites.snapshot().into_iter().collect::<Vec<_>>();
            list_response(to_items(figures().by_ids(&ids)))
        }
        Err(err) => error_list(format!("favorites_list failed: {err}")),
    }
}

/// Flips favorite membership of one figure id.
#[flutter_rust_bridge::frb(sync)]
pub fn favorite_toggle(id: i32) -> ActionResponse {
    let ctx = match settings() {
        Ok(ctx) => ctx,
        Err(err) => return ActionResponse::failure(format!("favorite_toggle failed: {err}")),
    };
    match ctx.favorites.toggle(id) {
        Ok(is_favorite) => ActionResponse {
            ok: true,
            is_favorite: Some(is_favorite),
            message: if is_favorite {
                "Added to favorites.".to_string()
            } else {
                "Removed from favorites.".to_string()
            },
        },
        Err(err) => ActionResponse::failure(format!("favorite_toggle failed: {err}")),
    }
}

/// Reports favorite membership in `is_favorite`.
///
/// When favorites cannot be read, `ok` is `false`, `is_favorite` is
/// `Some(false)` and `message` carries the cause.
#[flutter_rust_bridge::frb(sync)]
pub fn favorite_is(id: i32) -> ActionResponse {
    match settings().and_then(favorites_ready) {
        Ok(ctx) => ActionResponse {
            is_favorite: Some(ctx.favorites.is_favorite(id)),
            ..ActionResponse::success("")
        },
        Err(err) => ActionResponse {
            is_favorite: Some(false),
            ..ActionResponse::failure(format!("favorite_is failed: {err}"))
        },
    }
}

/// Removes every favorite.
#[flutter_rust_bridge::frb(sync)]
pub fn favorites_clear() -> ActionResponse {
    match settings().map(|ctx| ctx.favorites.clear_all()) {
        Ok(Ok(())) => ActionResponse {
            is_favorite: Some(false),
            ..ActionResponse::success("Favorites cleared.")
        },
        Ok(Err(err)) => ActionResponse::failure(format!("favorites_clear failed: {err}")),
        Err(err) => ActionResponse::failure(format!("favorites_clear failed: {err}")),
    }
}

/// Reads all preferences. Defaults are returned alongside an error message.
#[flutter_rust_bridge::frb(sync)]
pub fn prefs_get() -> PreferencesResponse {
    let snapshot = settings()
        .and_then(|ctx| ctx.preferences.snapshot().map_err(|err| err.to_string()));
    match snapshot {
        Ok(prefs) => PreferencesResponse {
            ok: true,
            onboarding_completed: prefs.onboarding_completed,
            language: prefs.language.code().to_string(),
            dark_mode: prefs.dark_mode,
            message: String::new(),
        },
        Err(err) => PreferencesResponse {
            ok: false,
            onboarding_completed: false,
            language: Language::default().code().to_string(),
            dark_mode: false,
            message: format!("prefs_get failed: {err}"),
        },
    }
}

/// Persists the interface language (`en` or `ar`).
#[flutter_rust_bridge::frb(sync)]
pub fn prefs_set_language(code: String) -> ActionResponse {
    let Some(language) = Language::from_code(code.trim()) else {
        return ActionResponse::failure(format!(
            "unsupported language `{}`; expected en|ar",
            code.trim()
        ));
    };
    run_action("prefs_set_language", "Language saved.", |ctx| {
        ctx.preferences.set_language(language)
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn prefs_set_onboarding_completed(completed: bool) -> ActionResponse {
    run_action(
        "prefs_set_onboarding_completed",
        "Onboarding state saved.",
        |ctx| ctx.preferences.set_onboarding_completed(completed),
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn prefs_set_dark_mode(enabled: bool) -> ActionResponse {
    run_action("prefs_set_dark_mode", "Theme saved.", |ctx| {
        ctx.preferences.set_dark_mode(enabled)
    })
}

fn config() -> &'static CoreConfig {
    CONFIG.get_or_init(|| {
        let config = CoreConfig::from_env();
        if let Err(err) = init_logging_from_config(&config) {
            warn!(
                "event=ffi_config module=ffi status=error error_code=logging_init_failed error={}",
                err
            );
        }
        config
    })
}

fn figures() -> &'static FigureService {
    FIGURES.get_or_init(|| FigureService::new(catalogue::shared(config().figures_path.as_deref())))
}

fn settings() -> Result<&'static SettingsContext, String> {
    SETTINGS.get_or_try_init(|| {
        let repo = SqliteKeyValueRepository::open(&config().db_path).map_err(|err| {
            warn!(
                "event=ffi_settings module=ffi status=error error_code=settings_open_failed error={}",
                err
            );
            format!("settings DB open failed: {err}")
        })?;
        let repo = Arc::new(repo);
        Ok(SettingsContext {
            favorites: FavoritesStore::open(Arc::clone(&repo)),
            preferences: PreferencesStore::new(repo),
        })
    })
}

/// Retries a failed favorites read before answering from the published set.
fn favorites_ready(ctx: &'static SettingsContext) -> Result<&'static SettingsContext, String> {
    if !ctx.favorites.is_degraded() {
        return Ok(ctx);
    }
    ctx.favorites
        .reload()
        .map(|_| ctx)
        .map_err(|err| format!("favorites unavailable: {err}"))
}

fn parse_category(category_id: &str) -> Result<Category, String> {
    let trimmed = category_id.trim();
    Category::from_id(trimmed).ok_or_else(|| format!("unknown category `{trimmed}`"))
}

fn list_response(items: Vec<FigureItem>) -> FiguresResponse {
    let message = if items.is_empty() {
        "No results.".to_string()
    } else {
        format!("Found {} result(s).", items.len())
    };
    FiguresResponse { items, message }
}

fn error_list(message: String) -> FiguresResponse {
    FiguresResponse {
        items: Vec::new(),
        message,
    }
}

fn run_action<E: std::fmt::Display>(
    operation: &str,
    success_message: &str,
    f: impl FnOnce(&SettingsContext) -> Result<(), E>,
) -> ActionResponse {
    match settings() {
        Ok(ctx) => match f(ctx) {
            Ok(()) => ActionResponse::success(success_message),
            Err(err) => ActionResponse::failure(format!("{operation} failed: {err}")),
        },
        Err(err) => ActionResponse::failure(format!("{operation} failed: {err}")),
    }
}

fn to_items<'a>(figures: impl IntoIterator<Item = &'a Figure>) -> Vec<FigureItem> {
    figures.into_iter().map(to_item).collect()
}

fn to_item(figure: &Figure) -> FigureItem {
    FigureItem {
        id: figure.id,
        name_en: figure.name_en.clone(),
        name_ar: figure.name_ar.clone(),
        category_id: figure.category.id().to_string(),
        image_url: figure.image_url.clone(),
        description_en: figure.description_en.clone(),
        description_ar: figure.description_ar.clone(),
        biography_en: figure.biography_en.clone(),
        biography_ar: figure.biography_ar.clone(),
        achievements_en: figure.achievements_en.clone(),
        achievements_ar: figure.achievements_ar.clone(),
        era: figure.era.clone(),
        years_active: figure.years_active,
        works_count: figure.works_count,
    }
}

fn to_category_item(category: Category) -> CategoryItem {
    use omanculture_core::model::category::presentation::Accent;

    let style = category.style();
    CategoryItem {
        id: category.id().to_string(),
        display_name_en: category.display_name_en().to_string(),
        display_name_ar: category.display_name_ar().to_string(),
        description_en: category.description_en().to_string(),
        description_ar: category.description_ar().to_string(),
        icon: style.icon.to_string(),
        accent: match style.accent {
            Accent::Primary => "primary",
            Accent::Secondary => "secondary",
            Accent::Tertiary => "tertiary",
        }
        .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        categories, core_version, favorite_is, favorite_toggle, favorites_list, figure_by_id,
        figure_featured, figures_all, figures_by_category, figures_search, init_logging,
        prefs_get, prefs_set_dark_mode, prefs_set_language,
    };

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_input() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn catalogue_queries_are_exposed() {
        let all = figures_all();
        assert!(!all.items.is_empty(), "{}", all.message);

        let featured = figure_featured().expect("featured figure should exist");
        assert_eq!(featured.id, all.items[0].id);
        assert!(figure_by_id(-1).is_none());

        let sports = figures_by_category("sports".to_string());
        assert!(sports.items.iter().all(|item| item.category_id == "sports"));
        let unknown = figures_by_category("astronauts".to_string());
        assert!(unknown.items.is_empty());
        assert!(unknown.message.contains("unknown category"));

        assert_eq!(categories().len(), 6);
    }

    #[test]
    fn search_honors_blank_query_and_category() {
        let everything = figures_search("  ".to_string(), None);
        assert_eq!(everything.items.len(), figures_all().items.len());

        let filtered = figures_search(" ".to_string(), Some("modern".to_string()));
        assert!(filtered.items.iter().all(|item| item.category_id == "modern"));
        assert_eq!(
            filtered.items.len(),
            figures_by_category("modern".to_string()).items.len()
        );
    }

    #[test]
    fn favorite_toggle_flips_membership() {
        let id = figures_all().items[0].id;
        let status = favorite_is(id);
        assert!(status.ok, "{}", status.message);
        let before = status.is_favorite.unwrap();

        let first = favorite_toggle(id);
        assert!(first.ok, "{}", first.message);
        assert_eq!(first.is_favorite, Some(!before));
        assert_eq!(
            favorites_list().items.iter().any(|item| item.id == id),
            !before
        );

        let second = favorite_toggle(id);
        assert_eq!(second.is_favorite, Some(before));
    }

    #[test]
    fn preferences_round_trip_and_reject_unknown_language() {
        let rejected = prefs_set_language("fr".to_string());
        assert!(!rejected.ok);

        assert!(prefs_set_language("ar".to_string()).ok);
        assert!(prefs_set_dark_mode(true).ok);
        let prefs = prefs_get();
        assert!(prefs.ok, "{}", prefs.message);
        assert_eq!(prefs.language, "ar");
        assert!(prefs.dark_mode);
    }
}
