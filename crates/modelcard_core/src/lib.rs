//! Model card metadata aggregation.
//!
//! Turns one form submission into a `ModelCard` record and exports it as a
//! rendered HTML document plus a structured JSON record.

pub mod aggregate;
pub mod backend;
pub mod config;
pub mod export;
pub mod form;
pub mod logging;
pub mod model;
pub mod render;
pub mod service;

pub use aggregate::aggregate_submission;
pub use backend::registry::BackendRegistry;
pub use backend::{BackendCapabilities, CardBackend};
pub use config::{AggregatorConfig, ConfigError, DEFAULT_REFERENCE_SLOTS};
pub use export::{ExportArtifact, ExportBundle};
pub use form::fields::{field_catalog, FieldKind, FormField, FormSection};
pub use form::submission::{FormSubmission, SubmissionError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::card::{
    Citation, License, ModelCard, ModelMetadata, Owner, RecordError, Reference, Version,
};
pub use render::RenderError;
pub use service::card_service::{ModelCardService, ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
