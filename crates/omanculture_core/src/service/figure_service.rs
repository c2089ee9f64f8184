//! Figure query service.
//!
//! # Responsibility
//! - Answer lookup, category, id-set and text queries against the catalogue.
//!
//! # Invariants
//! - Every list result is a subsequence of `all()` in catalogue order.
//! - Operations are pure functions of the catalogue snapshot.
//! - Lookup misses are `None`, never errors.

use crate::catalogue::Catalogue;
use crate::model::category::Category;
use crate::model::figure::{Figure, FigureId};
use std::collections::HashSet;
use std::sync::Arc;

/// Query facade over one immutable catalogue snapshot.
#[derive(Debug, Clone)]
pub struct FigureService {
    catalogue: Arc<Catalogue>,
}

impl FigureService {
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self { catalogue }
    }

    pub fn catalogue(&self) -> &Arc<Catalogue> {
        &self.catalogue
    }

    /// Full figure list in authoring order.
    pub fn all(&self) -> &[Figure] {
        self.catalogue.figures()
    }

    pub fn by_id(&self, id: FigureId) -> Option<&Figure> {
        self.all().iter().find(|figure| figure.id == id)
    }

    pub fn by_category(&self, category: Category) -> Vec<&Figure> {
        self.all()
            .iter()
            .filter(|figure| figure.category == category)
            .collect()
    }

    /// Figures whose id is in `ids`.
    ///
    /// Results follow catalogue order, not the order of `ids`. Unknown ids
    /// are ignored.
    pub fn by_ids(&self, ids: &[FigureId]) -> Vec<&Figure> {
        let wanted: HashSet<FigureId> = ids.iter().copied().collect();
        self.all()
            .iter()
            .filter(|figure| wanted.contains(&figure.id))
            .collect()
    }

    /// Substring search over names and short descriptions.
    ///
    /// English fields compare case-insensitively and Arabic fields exactly.
    /// Blank input is not special-cased: an empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Figure> {
        self.all()
            .iter()
            .filter(|figure| figure.matches_query(query))
            .collect()
    }

    /// First figure of the catalogue.
    pub fn featured(&self) -> Option<&Figure> {
        self.all().first()
    }

    /// All categories in declaration order.
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }
}
