//! Flutter-facing bindings for the union archive core.

pub mod api;
