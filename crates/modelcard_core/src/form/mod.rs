//! Form submission boundary.
//!
//! # Responsibility
//! - Publish the field catalog a UI builds its form from.
//! - Accept one submission as typed fields or a flat key/value mapping.
//!
//! # Invariants
//! - No field is required; absent keys read as empty strings.
//! - Flat mappings only accept catalog keys.

pub mod fields;
pub mod submission;
