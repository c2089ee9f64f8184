//! Flutter-facing bindings for `omanculture_core`.

pub mod api;
