//! Card backends.
//!
//! # Responsibility
//! - Define the capability-provider contract used by the aggregator service.
//! - Ship the built-in `toolkit` and `placeholder` backends.
//!
//! # Invariants
//! - Every backend builds the same `ModelCard` record shape.
//! - Backends differ only in declared capabilities (e.g. document rendering).

pub mod placeholder;
pub mod registry;
pub mod toolkit;

use crate::model::card::{ModelCard, ModelMetadata};
use crate::render::RenderError;

/// Backend id of the full rendering toolkit.
pub const BACKEND_TOOLKIT: &str = "toolkit";
/// Backend id of the record-only fallback.
pub const BACKEND_PLACEHOLDER: &str = "placeholder";

/// Capabilities a backend declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendCapabilities {
    pub render_document: bool,
}

/// Capability-provider contract for card construction and rendering.
pub trait CardBackend: Send + Sync {
    /// Stable lowercase backend id.
    fn backend_id(&self) -> &str;

    fn capabilities(&self) -> BackendCapabilities;

    /// Places aggregated metadata into a card record.
    fn build_card(&self, metadata: ModelMetadata) -> ModelCard {
        ModelCard::new(metadata)
    }

    /// Renders the human-readable document.
    ///
    /// Only called when `capabilities().render_document` is set; may still
    /// fail with `RenderError`.
    fn render_document(&self, card: &ModelCard) -> Result<String, RenderError>;
}
