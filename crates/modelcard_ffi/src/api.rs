//! FFI use-case API for the Flutter model card form.
//!
//! # Responsibility
//! - Expose the submit action and its outputs to Dart via FRB.
//! - Resolve the aggregator configuration once per process.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - A failed submission returns a failure envelope; the next call is unaffected.

use log::warn;
use modelcard_core::{
    core_version as core_version_inner, default_log_level, init_logging as init_logging_inner,
    AggregatorConfig, ExportArtifact, ExportBundle, FieldKind, FormField, FormSubmission,
    ModelCardService,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

static AGGREGATOR: OnceLock<Aggregator> = OnceLock::new();

struct Aggregator {
    config: AggregatorConfig,
    service: ModelCardService,
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive); blank
///   takes the build default (`debug` in debug builds, `info` otherwise).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let level = match level.trim() {
        "" => default_log_level(),
        value => value,
    };
    match init_logging_inner(level, log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Selects the card backend and reference batch size at startup.
///
/// Input semantics:
/// - `backend_id`: registered id such as `toolkit|placeholder`
///   (case-insensitive). Unregistered ids resolve to `placeholder`.
/// - `reference_slots`: `None` keeps the default of 3.
///
/// # FFI contract
/// - Must run before the first submission to take effect; later submissions
///   otherwise resolve the default configuration.
/// - Idempotent for the same configuration; a different one is rejected.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_backend(backend_id: String, reference_slots: Option<u32>) -> String {
    match configure(backend_id.as_str(), reference_slots) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Returns the active backend id (`toolkit|placeholder`), resolving the
/// default configuration when none was set.
#[flutter_rust_bridge::frb(sync)]
pub fn active_backend() -> String {
    aggregator().service.backend_id().to_string()
}

/// Form input descriptor for UI construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldItem {
    /// Flat-mapping key used by `submit_model_card_fields`.
    pub key: String,
    pub label: String,
    pub help: String,
    /// `text|text_area|date`.
    pub kind: String,
    /// Section title, e.g. `Model Details`.
    pub section: String,
}

/// Returns the field catalog in form order.
#[flutter_rust_bridge::frb(sync)]
pub fn form_fields() -> Vec<FormFieldItem> {
    aggregator()
        .service
        .form_fields()
        .into_iter()
        .map(to_form_field_item)
        .collect()
}

/// Typed form values for one submit action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelCardForm {
    pub name: String,
    pub path: String,
    pub overview: String,
    pub documentation: String,
    pub owner_name: String,
    pub owner_contact: String,
    pub version_name: String,
    /// Blank or `YYYY-MM-DD`.
    pub version_date: String,
    pub version_diff: String,
    pub license_identifier: String,
    pub license_custom_text: String,
    pub references: Vec<String>,
    pub citation_style: String,
    pub citation_text: String,
}

/// Downloadable output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: String,
    pub content: String,
}

/// Response envelope for one submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCardExportResponse {
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
    /// Rendered HTML document (or placeholder document).
    pub html: Option<ExportFile>,
    /// Structured JSON record.
    pub json: Option<ExportFile>,
    /// Whether `html` holds the placeholder document.
    pub html_is_placeholder: bool,
}

impl ModelCardExportResponse {
    fn success(bundle: ExportBundle) -> Self {
        let message = if bundle.document_is_placeholder {
            "Model card exported; document rendering is unavailable.".to_string()
        } else {
            "Model card exported.".to_string()
        };
        Self {
            ok: true,
            message,
            html: Some(to_export_file(bundle.document)),
            json: Some(to_export_file(bundle.record)),
            html_is_placeholder: bundle.document_is_placeholder,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            html: None,
            json: None,
            html_is_placeholder: false,
        }
    }
}

/// Runs one aggregation-and-export cycle from typed form values.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics.
/// - Returns both outputs on success, a failure message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn submit_model_card(form: ModelCardForm) -> ModelCardExportResponse {
    match aggregator().service.submit(&to_submission(form)) {
        Ok(bundle) => ModelCardExportResponse::success(bundle),
        Err(err) => ModelCardExportResponse::failure(format!("submit failed: {err}")),
    }
}

/// Runs one aggregation-and-export cycle from a flat `key -> value` mapping.
///
/// Keys follow `form_fields()`; unknown keys fail the submission.
#[flutter_rust_bridge::frb(sync)]
pub fn submit_model_card_fields(fields: HashMap<String, String>) -> ModelCardExportResponse {
    let fields = fields.into_iter().collect::<BTreeMap<_, _>>();
    match aggregator().service.submit_fields(&fields) {
        Ok(bundle) => ModelCardExportResponse::success(bundle),
        Err(err) => ModelCardExportResponse::failure(format!("submit failed: {err}")),
    }
}

fn configure(backend_id: &str, reference_slots: Option<u32>) -> Result<(), String> {
    let config = AggregatorConfig::new(backend_id, reference_slots.map(|value| value as usize))
        .map_err(|err| err.to_string())?;

    let active = &AGGREGATOR
        .get_or_init(|| build_aggregator(config.clone()))
        .config;
    if *active != config {
        warn!(
            "event=configure_backend module=ffi status=rejected requested={} active={}",
            config.backend, active.backend
        );
        return Err(format!(
            "aggregator already configured with backend `{}` and {} reference slot(s); refusing to switch",
            active.backend, active.reference_slots
        ));
    }
    Ok(())
}

fn aggregator() -> &'static Aggregator {
    AGGREGATOR.get_or_init(|| build_aggregator(AggregatorConfig::default()))
}

fn build_aggregator(config: AggregatorConfig) -> Aggregator {
    Aggregator {
        service: ModelCardService::from_config(&config),
        config,
    }
}

fn to_submission(form: ModelCardForm) -> FormSubmission {
    FormSubmission {
        name: form.name,
        path: form.path,
        overview: form.overview,
        documentation: form.documentation,
        owner_name: form.owner_name,
        owner_contact: form.owner_contact,
        version_name: form.version_name,
        version_date: form.version_date,
        version_diff: form.version_diff,
        license_identifier: form.license_identifier,
        license_custom_text: form.license_custom_text,
        references: form.references,
        citation_style: form.citation_style,
        citation_text: form.citation_text,
    }
}

fn to_export_file(artifact: ExportArtifact) -> ExportFile {
    ExportFile {
        file_name: artifact.file_name.to_string(),
        mime_type: artifact.mime_type.to_string(),
        content: artifact.content,
    }
}

fn to_form_field_item(field: FormField) -> FormFieldItem {
    FormFieldItem {
        key: field.key,
        label: field.label,
        help: field.help,
        kind: field_kind_label(field.kind).to_string(),
        section: field.section.title().to_string(),
    }
}

fn field_kind_label(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "text",
        FieldKind::TextArea => "text_area",
        FieldKind::Date => "date",
    }
}
