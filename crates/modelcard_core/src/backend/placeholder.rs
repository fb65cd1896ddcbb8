//! Record-only fallback backend.
//!
//! Builds the same card record as the toolkit but declares no document
//! renderer; callers substitute the placeholder document.

use crate::backend::{BackendCapabilities, CardBackend, BACKEND_PLACEHOLDER};
use crate::model::card::ModelCard;
use crate::render::RenderError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaceholderBackend;

impl PlaceholderBackend {
    pub fn new() -> Self {
        Self
    }
}

impl CardBackend for PlaceholderBackend {
    fn backend_id(&self) -> &str {
        BACKEND_PLACEHOLDER
    }

    fn capabilities(&self) -> BackendCapabilities {
        BackendCapabilities {
            render_document: false,
        }
    }

    fn render_document(&self, _card: &ModelCard) -> Result<String, RenderError> {
        Err(RenderError::Unavailable {
            backend_id: BACKEND_PLACEHOLDER.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::PlaceholderBackend;
    use crate::backend::toolkit::ToolkitBackend;
    use crate::backend::CardBackend;
    use crate::model::card::{ModelCard, ModelMetadata, Owner};
    use crate::render::RenderError;

    #[test]
    fn builds_same_record_as_toolkit() {
        let metadata = ModelMetadata {
            name: "BERT".to_string(),
            owners: vec![Owner::new("Jane Doe", "jane@example.com")],
            ..ModelMetadata::default()
        };
        assert_eq!(
            PlaceholderBackend::new().build_card(metadata.clone()),
            ToolkitBackend::new().build_card(metadata)
        );
    }

    #[test]
    fn render_document_reports_unavailable() {
        let backend = PlaceholderBackend::new();
        assert!(!backend.capabilities().render_document);
        let err = backend
            .render_document(&ModelCard::default())
            .expect_err("placeholder cannot render");
        assert_eq!(
            err,
            RenderError::Unavailable {
                backend_id: "placeholder".to_string()
            }
        );
    }
}
