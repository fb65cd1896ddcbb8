//! Model card submission service.
//!
//! # Responsibility
//! - Validate a submission, aggregate it and export both outputs.
//! - Substitute the placeholder document when the backend cannot render.
//!
//! # Invariants
//! - Each call is independent; the service keeps no per-submission state.
//! - Rendering failure never blocks the structured record.
//! - Log lines carry counts and ids only, never field contents.

use crate::aggregate::aggregate_submission;
use crate::backend::registry::BackendRegistry;
use crate::backend::CardBackend;
use crate::config::AggregatorConfig;
use crate::export::{ExportArtifact, ExportBundle};
use crate::form::fields::{field_catalog, FormField};
use crate::form::submission::{FormSubmission, SubmissionError};
use crate::model::card::{ModelCard, RecordError};
use crate::render::{placeholder_document, RenderError, RENDER_UNAVAILABLE_NOTICE};
use log::{info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Submission cycle errors.
#[derive(Debug)]
pub enum ServiceError {
    Submission(SubmissionError),
    Record(RecordError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Submission(err) => write!(f, "{err}"),
            Self::Record(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Submission(err) => Some(err),
            Self::Record(err) => Some(err),
        }
    }
}

impl From<SubmissionError> for ServiceError {
    fn from(value: SubmissionError) -> Self {
        Self::Submission(value)
    }
}

impl From<RecordError> for ServiceError {
    fn from(value: RecordError) -> Self {
        Self::Record(value)
    }
}

/// Use-case service for the submit action.
pub struct ModelCardService {
    backend: Arc<dyn CardBackend>,
    reference_slots: usize,
}

impl ModelCardService {
    /// Creates a service over an explicit backend.
    pub fn new(backend: Arc<dyn CardBackend>, reference_slots: usize) -> Self {
        Self {
            backend,
            reference_slots,
        }
    }

    /// Resolves the configured backend from the built-in registry.
    ///
    /// Falls back to the placeholder backend when the configured id is not
    /// registered.
    pub fn from_config(config: &AggregatorConfig) -> Self {
        let backend = BackendRegistry::builtin().resolve(&config.backend);
        info!(
            "event=service_init module=service status=ok requested={} backend={} reference_slots={}",
            config.backend,
            backend.backend_id(),
            config.reference_slots
        );
        Self::new(backend, config.reference_slots)
    }

    pub fn backend_id(&self) -> &str {
        self.backend.backend_id()
    }

    pub fn reference_slots(&self) -> usize {
        self.reference_slots
    }

    /// Field catalog matching this service's reference batch size.
    pub fn form_fields(&self) -> Vec<FormField> {
        field_catalog(self.reference_slots)
    }

    /// Runs one aggregation-and-export cycle.
    ///
    /// # Errors
    /// - `Submission` when the reference batch is oversized or the version
    ///   date is malformed.
    /// - `Record` when JSON encoding fails.
    pub fn submit(&self, submission: &FormSubmission) -> ServiceResult<ExportBundle> {
        if let Err(err) = submission.validate(self.reference_slots) {
            warn!(
                "event=submission_rejected module=service status=error reason={}",
                rejection_reason(&err)
            );
            return Err(err.into());
        }

        let metadata = aggregate_submission(submission)?;
        let card = self.backend.build_card(metadata);
        let record = card.to_json()?;

        let (document, document_is_placeholder) = match self.render(&card) {
            Ok(document) => (document, false),
            Err(err) => {
                warn!(
                    "event=render_unavailable module=service status=degraded backend={} notice=\"{}\" reason={}",
                    self.backend.backend_id(),
                    RENDER_UNAVAILABLE_NOTICE,
                    err
                );
                (placeholder_document(), true)
            }
        };

        let details = &card.model_details;
        info!(
            "event=card_exported module=service status=ok backend={} owners={} licenses={} references={} citations={} html_bytes={} json_bytes={}",
            self.backend.backend_id(),
            details.owners.len(),
            details.licenses.len(),
            details.references.len(),
            details.citations.len(),
            document.len(),
            record.len()
        );

        Ok(ExportBundle {
            document: ExportArtifact::document(document),
            record: ExportArtifact::record(record),
            document_is_placeholder,
            card,
        })
    }

    fn render(&self, card: &ModelCard) -> Result<String, RenderError> {
        if !self.backend.capabilities().render_document {
            return Err(RenderError::Unavailable {
                backend_id: self.backend.backend_id().to_string(),
            });
        }
        self.backend.render_document(card)
    }

    /// Runs one cycle from a flat `key -> value` submission mapping.
    pub fn submit_fields(&self, fields: &BTreeMap<String, String>) -> ServiceResult<ExportBundle> {
        let submission = FormSubmission::from_fields(fields, self.reference_slots)?;
        self.submit(&submission)
    }
}

fn rejection_reason(err: &SubmissionError) -> &'static str {
    match err {
        SubmissionError::UnknownField(_) => "unknown_field",
        SubmissionError::ReferenceSlotOutOfRange { .. } => "reference_slot_out_of_range",
        SubmissionError::TooManyReferences { .. } => "too_many_references",
        SubmissionError::InvalidVersionDate(_) => "invalid_version_date",
    }
}
