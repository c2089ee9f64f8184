//! Read-only query services over the catalogue.
//!
//! # Responsibility
//! - Derive figure views (lookup, filters, search) from one catalogue snapshot.
//! - Keep view reducers and the FFI layer decoupled from catalogue loading.

pub mod figure_service;
