//! Bundled figures document schema.
//!
//! # Responsibility
//! - Decode the `{"figures": [...]}` wrapper with camelCase record fields.
//! - Convert records into domain figures with soft category resolution.
//!
//! # Invariants
//! - An unknown category reference maps to `FALLBACK_CATEGORY`, never an error.
//! - Negative counters are clamped to zero.

use crate::model::category::{Category, FALLBACK_CATEGORY};
use crate::model::figure::{Figure, FigureId};
use log::debug;
use serde::{Deserialize, Serialize};

/// Top-level wrapper of the bundled document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiguresDocument {
    pub figures: Vec<FigureRecord>,
}

/// One figure as authored in the bundled document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigureRecord {
    pub id: FigureId,
    pub name_en: String,
    pub name_ar: String,
    /// Category identifier or declared name; resolved leniently.
    pub category: String,
    pub image_url: String,
    pub description_en: String,
    pub description_ar: String,
    pub biography_en: String,
    pub biography_ar: String,
    #[serde(default)]
    pub achievements_en: Vec<String>,
    #[serde(default)]
    pub achievements_ar: Vec<String>,
    pub era: String,
    #[serde(default)]
    pub years_active: i64,
    #[serde(default)]
    pub works_count: i64,
}

impl FigureRecord {
    /// Converts this record into a catalogue figure.
    pub fn into_figure(self) -> Figure {
        let category = Category::resolve(&self.category).unwrap_or_else(|| {
            debug!(
                "event=category_fallback module=catalogue status=fallback figure_id={}",
                self.id
            );
            FALLBACK_CATEGORY
        });

        Figure {
            id: self.id,
            name_en: self.name_en,
            name_ar: self.name_ar,
            category,
            image_url: self.image_url,
            description_en: self.description_en,
            description_ar: self.description_ar,
            biography_en: self.biography_en,
            biography_ar: self.biography_ar,
            achievements_en: self.achievements_en,
            achievements_ar: self.achievements_ar,
            era: self.era,
            years_active: clamp_counter(self.years_active),
            works_count: clamp_counter(self.works_count),
        }
    }
}

fn clamp_counter(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::FiguresDocument;
    use crate::model::category::Category;

    fn record_json(category: &str, years_active: i64) -> String {
        format!(
            r#"{{"figures":[{{
                "id": 42,
                "nameEn": "Test Figure",
                "nameAr": "شخصية",
                "category": "{category}",
                "imageUrl": "https://example.com/a.png",
                "descriptionEn": "desc",
                "descriptionAr": "وصف",
                "biographyEn": "bio",
                "biographyAr": "سيرة",
                "achievementsEn": ["one"],
                "achievementsAr": ["واحد"],
                "era": "1900-1950",
                "yearsActive": {years_active},
                "worksCount": 3
            }}]}}"#
        )
    }

    #[test]
    fn unknown_category_falls_back_to_modern() {
        let doc: FiguresDocument = serde_json::from_str(&record_json("astronauts", 5)).unwrap();
        let figure = doc.figures.into_iter().next().unwrap().into_figure();
        assert_eq!(figure.category, Category::Modern);
    }

    #[test]
    fn declared_name_resolves_category() {
        let doc: FiguresDocument = serde_json::from_str(&record_json("ARTISTS", 5)).unwrap();
        let figure = doc.figures.into_iter().next().unwrap().into_figure();
        assert_eq!(figure.category, Category::Artists);
    }

    #[test]
    fn negative_counters_clamp_to_zero() {
        let doc: FiguresDocument = serde_json::from_str(&record_json("sports", -4)).unwrap();
        let figure = doc.figures.into_iter().next().unwrap().into_figure();
        assert_eq!(figure.years_active, 0);
        assert_eq!(figure.works_count, 3);
    }
}
