//! Full backend with HTML document rendering.

use crate::backend::{BackendCapabilities, CardBackend, BACKEND_TOOLKIT};
use crate::model::card::ModelCard;
use crate::render::html::render_html;
use crate::render::RenderError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolkitBackend;

impl ToolkitBackend {
    pub fn new() -> Self {
        Self
    }
}

impl CardBackend for ToolkitBackend {
    fn backend_id(&self) -> &str {
        BACKEND_TOOLKIT
    }

    fn capabilities(&self) -> BackendCapabilities {
        BackendCapabilities {
            render_document: true,
        }
    }

    fn render_document(&self, card: &ModelCard) -> Result<String, RenderError> {
        Ok(render_html(card))
    }
}
