//! Figure domain model.
//!
//! # Responsibility
//! - Define the biographical record shown by list, detail and favorites views.
//! - Provide language-aware accessors for bilingual fields.
//!
//! # Invariants
//! - `id` is stable and never reassigned to another figure.
//! - Figures are created once at catalogue load and never mutated afterwards.
//! - `achievements_en` and `achievements_ar` correspond by index by
//!   convention; this is not enforced.

use crate::model::category::Category;
use crate::model::language::Language;
use serde::{Deserialize, Serialize};

/// Stable figure identifier assigned at authoring time.
pub type FigureId = i32;

/// One biographical catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    pub id: FigureId,
    pub name_en: String,
    pub name_ar: String,
    pub category: Category,
    pub image_url: String,
    pub description_en: String,
    pub description_ar: String,
    pub biography_en: String,
    pub biography_ar: String,
    pub achievements_en: Vec<String>,
    pub achievements_ar: Vec<String>,
    /// Free-text range such as `1940-2020` or `1970-Present`.
    pub era: String,
    pub years_active: u32,
    pub works_count: u32,
}

impl Figure {
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::English => &self.name_en,
            Language::Arabic => &self.name_ar,
        }
    }

    pub fn description(&self, language: Language) -> &str {
        match language {
            Language::English => &self.description_en,
            Language::Arabic => &self.description_ar,
        }
    }

    pub fn biography(&self, language: Language) -> &str {
        match language {
            Language::English => &self.biography_en,
            Language::Arabic => &self.biography_ar,
        }
    }

    pub fn achievements(&self, language: Language) -> &[String] {
        match language {
            Language::English => &self.achievements_en,
            Language::Arabic => &self.achievements_ar,
        }
    }

    /// Search predicate over names and short descriptions.
    ///
    /// English fields match case-insensitively, Arabic fields match exactly.
    pub fn matches_query(&self, query: &str) -> bool {
        let folded = query.to_lowercase();
        self.name_en.to_lowercase().contains(&folded)
            || self.name_ar.contains(query)
            || self.description_en.to_lowercase().contains(&folded)
            || self.description_ar.contains(query)
    }
}
