//! Durable settings stores.
//!
//! # Responsibility
//! - Own the favorite-id set and scalar preferences on top of the key-value
//!   repository.
//! - Surface persistence failures as recoverable `StoreError`s.
//!
//! # Invariants
//! - A mutation reports success only after its write has committed.
//! - Mutations of one key are applied sequentially; none is lost.

use crate::repo::kv_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod favorites;
pub mod preferences;

pub type StoreResult<T> = Result<T, StoreError>;

/// Recoverable settings-store error.
#[derive(Debug)]
pub enum StoreError {
    Repo(RepoError),
    /// The store feeding an observer was dropped.
    Closed,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "settings persistence failed: {err}"),
            Self::Closed => write!(f, "settings store was closed"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Closed => None,
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
