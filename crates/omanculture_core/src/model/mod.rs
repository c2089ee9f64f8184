//! Domain model for the figure catalogue and user settings.
//!
//! # Responsibility
//! - Define the canonical figure/category records consumed by queries and views.
//! - Define typed settings values and their persisted string encodings.
//!
//! # Invariants
//! - Every figure is identified by a stable integer `FigureId` assigned at
//!   authoring time; ids are never reused.
//! - The category set is closed; no runtime creation or deletion.

pub mod category;
pub mod codec;
pub mod figure;
pub mod language;
