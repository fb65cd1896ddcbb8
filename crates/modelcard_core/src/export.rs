//! Downloadable output artifacts of one submission cycle.

use crate::model::card::ModelCard;

/// File name offered for the rendered document.
pub const DOCUMENT_FILE_NAME: &str = "model_card.html";
pub const DOCUMENT_MIME_TYPE: &str = "text/html";
/// File name offered for the structured record.
pub const RECORD_FILE_NAME: &str = "model_card.json";
pub const RECORD_MIME_TYPE: &str = "application/json";

/// One downloadable output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub content: String,
}

impl ExportArtifact {
    pub fn document(content: String) -> Self {
        Self {
            file_name: DOCUMENT_FILE_NAME,
            mime_type: DOCUMENT_MIME_TYPE,
            content,
        }
    }

    pub fn record(content: String) -> Self {
        Self {
            file_name: RECORD_FILE_NAME,
            mime_type: RECORD_MIME_TYPE,
            content,
        }
    }
}

/// Both outputs plus the card they were produced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBundle {
    pub card: ModelCard,
    /// HTML document, or the placeholder document when rendering is unavailable.
    pub document: ExportArtifact,
    pub record: ExportArtifact,
    /// `true` when `document` holds the placeholder instead of a rendering.
    pub document_is_placeholder: bool,
}
