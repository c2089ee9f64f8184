//! Per-screen view state reducers.
//!
//! # Responsibility
//! - Combine query results, filter selections and favorites into render-ready
//!   snapshots for the presentation layer.
//!
//! # Invariants
//! - Reducers are pure: `reduce(service, state, event)` depends only on its
//!   inputs.
//! - Holders own derived state only; persisted state arrives as events.

use crate::model::codec::FavoriteSet;
use tokio::sync::watch;

pub mod category;
pub mod detail;
pub mod favorites;
pub mod home;

/// Takes the latest favorites set if it changed since the last call.
pub fn take_favorites_update(receiver: &mut watch::Receiver<FavoriteSet>) -> Option<FavoriteSet> {
    match receiver.has_changed() {
        Ok(true) => Some(receiver.borrow_and_update().clone()),
        _ => None,
    }
}
