//! Flutter-facing bindings for the model card aggregator.

pub mod api;
