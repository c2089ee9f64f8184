//! String encodings for persisted settings values.
//!
//! # Responsibility
//! - Serialize each typed setting to the string stored in `kv_entries.value`.
//! - Decode stored strings leniently so stale or foreign data never blocks reads.
//!
//! # Invariants
//! - Favorite-id sets are stored as a JSON array of decimal strings.
//! - Decoding drops entries that do not parse as integers.

use crate::model::figure::FigureId;
use crate::model::language::Language;
use std::collections::BTreeSet;

/// Set of favorite figure ids.
pub type FavoriteSet = BTreeSet<FigureId>;

/// Typed value that can be stored under one key-value entry.
pub trait KvCodec: Sized {
    fn encode(&self) -> String;
    /// Returns `None` when the stored text is not a valid encoding.
    fn decode(raw: &str) -> Option<Self>;
}

impl KvCodec for bool {
    fn encode(&self) -> String {
        if *self { "true" } else { "false" }.to_string()
    }

    fn decode(raw: &str) -> Option<Self> {
        match raw {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

impl KvCodec for Language {
    fn encode(&self) -> String {
        self.code().to_string()
    }

    fn decode(raw: &str) -> Option<Self> {
        Language::from_code(raw)
    }
}

impl KvCodec for FavoriteSet {
    fn encode(&self) -> String {
        let entries = self.iter().map(|id| id.to_string()).collect::<Vec<_>>();
        serde_json::Value::from(entries).to_string()
    }

    fn decode(raw: &str) -> Option<Self> {
        let entries: Vec<serde_json::Value> = serde_json::from_str(raw).ok()?;
        Some(
            entries
                .iter()
                .filter_map(|entry| match entry {
                    serde_json::Value::String(text) => text.trim().parse::<FigureId>().ok(),
                    _ => None,
                })
                .collect(),
        )
    }
}
