//! Fixed figure categories with bilingual metadata.
//!
//! # Responsibility
//! - Enumerate the closed set of topical groupings.
//! - Resolve category identifiers coming from bundled documents and routes.
//!
//! # Invariants
//! - `id()` values are unique and never change once published.
//! - `Category::ALL` is in declaration order; queries rely on it.

use crate::model::language::Language;
use serde::{Deserialize, Serialize};

/// Topical grouping of a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    HistoricalLeaders,
    PoetsWriters,
    Artists,
    Sports,
    Scholars,
    Modern,
}

/// Category used when a record names an unknown category.
pub const FALLBACK_CATEGORY: Category = Category::Modern;

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 6] = [
        Category::HistoricalLeaders,
        Category::PoetsWriters,
        Category::Artists,
        Category::Sports,
        Category::Scholars,
        Category::Modern,
    ];

    /// Stable identifier used by routes and bundled documents.
    pub fn id(self) -> &'static str {
        match self {
            Self::HistoricalLeaders => "historical_leaders",
            Self::PoetsWriters => "poets_writers",
            Self::Artists => "artists",
            Self::Sports => "sports",
            Self::Scholars => "scholars",
            Self::Modern => "modern",
        }
    }

    /// Declared enumeration name, e.g. `HISTORICAL_LEADERS`.
    pub fn declared_name(self) -> &'static str {
        match self {
            Self::HistoricalLeaders => "HISTORICAL_LEADERS",
            Self::PoetsWriters => "POETS_WRITERS",
            Self::Artists => "ARTISTS",
            Self::Sports => "SPORTS",
            Self::Scholars => "SCHOLARS",
            Self::Modern => "MODERN",
        }
    }

    pub fn display_name_en(self) -> &'static str {
        match self {
            Self::HistoricalLeaders => "Historical Leaders",
            Self::PoetsWriters => "Poets & Writers",
            Self::Artists => "Artists & Musicians",
            Self::Sports => "Sports Icons",
            Self::Scholars => "Scientists & Scholars",
            Self::Modern => "Modern Influencers",
        }
    }

    pub fn display_name_ar(self) -> &'static str {
        match self {
            Self::HistoricalLeaders => "القادة التاريخيون",
            Self::PoetsWriters => "الشعراء والكتّاب",
            Self::Artists => "الفنانون والموسيقيون",
            Self::Sports => "أيقونات الرياضة",
            Self::Scholars => "العلماء والباحثون",
            Self::Modern => "المؤثرون المعاصرون",
        }
    }

    pub fn description_en(self) -> &'static str {
        match self {
            Self::HistoricalLeaders => "Sultans and rulers who shaped Oman's history",
            Self::PoetsWriters => "Literary figures who enriched Omani culture",
            Self::Artists => "Creative talents in arts and music",
            Self::Sports => "Athletes who brought glory to Oman",
            Self::Scholars => "Academics and researchers",
            Self::Modern => "Contemporary figures shaping modern Oman",
        }
    }

    pub fn description_ar(self) -> &'static str {
        match self {
            Self::HistoricalLeaders => "السلاطين والحكام الذين شكلوا تاريخ عُمان",
            Self::PoetsWriters => "الأدباء الذين أثروا الثقافة العُمانية",
            Self::Artists => "المواهب الإبداعية في الفنون والموسيقى",
            Self::Sports => "الرياضيون الذين جلبوا المجد لعُمان",
            Self::Scholars => "الأكاديميون والباحثون",
            Self::Modern => "الشخصيات المعاصرة التي تشكل عُمان الحديثة",
        }
    }

    pub fn display_name(self, language: Language) -> &'static str {
        match language {
            Language::English => self.display_name_en(),
            Language::Arabic => self.display_name_ar(),
        }
    }

    pub fn description(self, language: Language) -> &'static str {
        match language {
            Language::English => self.description_en(),
            Language::Arabic => self.description_ar(),
        }
    }

    /// Looks up a category by its stable identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.id() == id)
    }

    /// Resolves a category reference from a bundled record.
    ///
    /// Matches either the stable identifier or the declared name, both
    /// case-sensitively. Returns `None` for anything else.
    pub fn resolve(reference: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.id() == reference || category.declared_name() == reference)
    }

    /// Rendering hints for the presentation layer.
    pub fn style(self) -> presentation::CategoryStyle {
        presentation::style_for(self)
    }
}

/// Rendering hints kept apart from the domain identifiers.
pub mod presentation {
    use super::Category;

    /// Named accent roles from the app palette.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Accent {
        Primary,
        Secondary,
        Tertiary,
    }

    /// Icon name plus accent role for one category.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CategoryStyle {
        /// Material icon name.
        pub icon: &'static str,
        pub accent: Accent,
    }

    pub(super) fn style_for(category: Category) -> CategoryStyle {
        let (icon, accent) = match category {
            Category::HistoricalLeaders => ("account_balance", Accent::Primary),
            Category::PoetsWriters => ("menu_book", Accent::Secondary),
            Category::Artists => ("music_note", Accent::Tertiary),
            Category::Sports => ("sports_soccer", Accent::Primary),
            Category::Scholars => ("science", Accent::Secondary),
            Category::Modern => ("trending_up", Accent::Tertiary),
        };
        CategoryStyle { icon, accent }
    }
}

#[cfg(test)]
mod tests {
    use super::Category;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = Category::ALL.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), Category::ALL.len());
    }

    #[test]
    fn resolve_accepts_id_and_declared_name_only() {
        assert_eq!(Category::resolve("sports"), Some(Category::Sports));
        assert_eq!(Category::resolve("SPORTS"), Some(Category::Sports));
        assert_eq!(Category::resolve("Sports"), None);
        assert_eq!(Category::resolve("astronauts"), None);
    }

    #[test]
    fn serde_uses_stable_ids() {
        let encoded = serde_json::to_string(&Category::PoetsWriters).unwrap();
        assert_eq!(encoded, "\"poets_writers\"");
    }
}
