//! Field catalog for the model card form.

/// Flat-mapping key for the model name.
pub const FIELD_NAME: &str = "name";
/// Flat-mapping key for the model storage path.
pub const FIELD_PATH: &str = "path";
/// Flat-mapping key for the overview text.
pub const FIELD_OVERVIEW: &str = "overview";
/// Flat-mapping key for the documentation text.
pub const FIELD_DOCUMENTATION: &str = "documentation";
/// Flat-mapping key for the owner name.
pub const FIELD_OWNER_NAME: &str = "owner.name";
/// Flat-mapping key for the owner contact.
pub const FIELD_OWNER_CONTACT: &str = "owner.contact";
/// Flat-mapping key for the version name.
pub const FIELD_VERSION_NAME: &str = "version.name";
/// Flat-mapping key for the version date (`YYYY-MM-DD`).
pub const FIELD_VERSION_DATE: &str = "version.date";
/// Flat-mapping key for the version diff.
pub const FIELD_VERSION_DIFF: &str = "version.diff";
/// Flat-mapping key for the license identifier.
pub const FIELD_LICENSE_IDENTIFIER: &str = "license.identifier";
/// Flat-mapping key for the custom license text.
pub const FIELD_LICENSE_CUSTOM_TEXT: &str = "license.custom_text";
/// Flat-mapping key prefix for reference slots (`reference.1`, `reference.2`...).
pub const FIELD_REFERENCE_PREFIX: &str = "reference.";
/// Flat-mapping key for the citation style.
pub const FIELD_CITATION_STYLE: &str = "citation.style";
/// Flat-mapping key for the citation text.
pub const FIELD_CITATION_TEXT: &str = "citation.citation";

/// Input widget kind a UI should use for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Date,
}

/// Form group a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormSection {
    ModelDetails,
    Owner,
    Version,
    License,
    References,
    Citation,
}

impl FormSection {
    pub fn title(self) -> &'static str {
        match self {
            Self::ModelDetails => "Model Details",
            Self::Owner => "Owner",
            Self::Version => "Version",
            Self::License => "License",
            Self::References => "References",
            Self::Citation => "Citation",
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Flat-mapping key.
    pub key: String,
    pub label: String,
    /// Help text shown next to the input; empty when none.
    pub help: String,
    pub kind: FieldKind,
    pub section: FormSection,
}

impl FormField {
    fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        help: impl Into<String>,
        kind: FieldKind,
        section: FormSection,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            help: help.into(),
            kind,
            section,
        }
    }
}

/// Returns the catalog in form order, with `reference_slots` reference inputs.
pub fn field_catalog(reference_slots: usize) -> Vec<FormField> {
    use FieldKind::{Date, Text, TextArea};
    use FormSection::*;

    let mut fields = vec![
        FormField::new(FIELD_NAME, "Name", "The name of the model.", Text, ModelDetails),
        FormField::new(
            FIELD_PATH,
            "Path",
            "The path where the model is stored.",
            Text,
            ModelDetails,
        ),
        FormField::new(
            FIELD_OVERVIEW,
            "Overview",
            "A description of the model card.",
            TextArea,
            ModelDetails,
        ),
        FormField::new(
            FIELD_DOCUMENTATION,
            "Documentation",
            "A more thorough description of the model and its usage.",
            TextArea,
            ModelDetails,
        ),
        FormField::new(
            FIELD_OWNER_NAME,
            "Name",
            "The name of the model owner.",
            Text,
            Owner,
        ),
        FormField::new(
            FIELD_OWNER_CONTACT,
            "Contact",
            "The contact information for the model owner or owners: an email \
             address, a team mailing list or a monitored feedback form.",
            Text,
            Owner,
        ),
        FormField::new(
            FIELD_VERSION_NAME,
            "Name",
            "The name of the version.",
            Text,
            Version,
        ),
        FormField::new(
            FIELD_VERSION_DATE,
            "Date",
            "The date this version was released (YYYY-MM-DD).",
            Date,
            Version,
        ),
        FormField::new(
            FIELD_VERSION_DIFF,
            "Diff",
            "The changes from the previous version.",
            TextArea,
            Version,
        ),
        FormField::new(
            FIELD_LICENSE_IDENTIFIER,
            "Identifier",
            "A standard SPDX license identifier (https://spdx.org/licenses/), or \
             'proprietary' for an unlicensed model.",
            Text,
            License,
        ),
        FormField::new(
            FIELD_LICENSE_CUSTOM_TEXT,
            "Custom Text",
            "The text of a custom license.",
            TextArea,
            License,
        ),
    ];

    for slot in 1..=reference_slots {
        fields.push(FormField::new(
            reference_key(slot),
            format!("Reference {slot}"),
            "",
            Text,
            References,
        ));
    }

    fields.push(FormField::new(
        FIELD_CITATION_STYLE,
        "Style",
        "The citation style, such as MLA, APA, Chicago, or IEEE.",
        Text,
        Citation,
    ));
    fields.push(FormField::new(
        FIELD_CITATION_TEXT,
        "Citation",
        "The citation.",
        TextArea,
        Citation,
    ));
    fields
}

/// Builds the flat-mapping key for a 1-based reference slot.
pub fn reference_key(slot: usize) -> String {
    format!("{FIELD_REFERENCE_PREFIX}{slot}")
}

/// Parses a reference key into its 1-based slot number.
///
/// Returns `None` for keys without the reference prefix or with a
/// non-numeric suffix.
pub fn parse_reference_slot(key: &str) -> Option<usize> {
    let suffix = key.strip_prefix(FIELD_REFERENCE_PREFIX)?;
    if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}
