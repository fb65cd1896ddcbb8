//! Human-readable document rendering.
//!
//! # Responsibility
//! - Render a `ModelCard` into a self-contained HTML document.
//! - Provide the placeholder document used when rendering is unavailable.
//!
//! # Invariants
//! - Rendering is deterministic (byte-identical for equal cards).
//! - All user-entered text is HTML-escaped.

pub mod html;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Notice shown in place of the rendered document.
pub const RENDER_UNAVAILABLE_NOTICE: &str =
    "Unable to render model card since the document renderer isn't available.";

/// Document rendering errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The active backend has no document renderer.
    Unavailable { backend_id: String },
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { backend_id } => {
                write!(f, "backend `{backend_id}` cannot render documents")
            }
        }
    }
}

impl Error for RenderError {}

/// Returns the clearly-marked stand-in document.
pub fn placeholder_document() -> String {
    format!("<b>{RENDER_UNAVAILABLE_NOTICE}</b>")
}
