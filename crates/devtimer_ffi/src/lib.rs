//! Flutter-facing bindings for the Dev Session Timer core.

pub mod api;
