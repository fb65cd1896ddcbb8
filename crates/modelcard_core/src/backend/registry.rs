//! Built-in backend registry and startup resolution.

use crate::backend::placeholder::PlaceholderBackend;
use crate::backend::toolkit::ToolkitBackend;
use crate::backend::{CardBackend, BACKEND_PLACEHOLDER};
use log::warn;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Registry of card backends keyed by backend id.
///
/// The placeholder backend is always present and serves as the fallback.
pub struct BackendRegistry {
    backends: BTreeMap<String, Arc<dyn CardBackend>>,
    fallback: Arc<dyn CardBackend>,
}

impl BackendRegistry {
    /// Registry holding the `toolkit` and `placeholder` backends.
    pub fn builtin() -> Self {
        let fallback: Arc<dyn CardBackend> = Arc::new(PlaceholderBackend::new());
        let backends: [Arc<dyn CardBackend>; 2] =
            [Arc::new(ToolkitBackend::new()), Arc::clone(&fallback)];
        Self {
            backends: backends
                .into_iter()
                .map(|backend| (backend.backend_id().to_string(), backend))
                .collect(),
            fallback,
        }
    }

    /// Returns the backend registered under `backend_id`.
    ///
    /// Unregistered ids resolve to the placeholder backend and log a warning.
    pub fn resolve(&self, backend_id: &str) -> Arc<dyn CardBackend> {
        let normalized = backend_id.trim();
        if let Some(backend) = self.backends.get(normalized) {
            return Arc::clone(backend);
        }
        warn!(
            "event=backend_fallback module=backend status=degraded requested={} fallback={}",
            normalized, BACKEND_PLACEHOLDER
        );
        Arc::clone(&self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::BackendRegistry;

    #[test]
    fn resolves_builtin_backends_by_trimmed_id() {
        let registry = BackendRegistry::builtin();
        assert_eq!(registry.resolve("toolkit").backend_id(), "toolkit");
        assert_eq!(registry.resolve("  placeholder ").backend_id(), "placeholder");
    }

    #[test]
    fn unregistered_id_falls_back_to_placeholder() {
        let registry = BackendRegistry::builtin();
        let backend = registry.resolve("mct");
        assert_eq!(backend.backend_id(), "placeholder");
        assert!(!backend.capabilities().render_document);
    }
}
