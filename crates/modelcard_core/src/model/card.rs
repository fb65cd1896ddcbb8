//! Model card domain model.
//!
//! # Responsibility
//! - Define the `ModelCard` aggregate and its sub-records.
//! - Encode/decode the structured JSON record.
//!
//! # Invariants
//! - JSON keys mirror field names in camelCase (`modelDetails`, `customText`).
//! - Decoding an encoded card yields an equal card.

use crate::model::iso_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Top-level record exported as the structured output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCard {
    #[serde(default)]
    pub model_details: ModelMetadata,
}

/// Identity, ownership, versioning, licensing, references and citations of one
/// model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelMetadata {
    pub name: String,
    /// Where the model artifacts are stored.
    pub path: String,
    pub overview: String,
    pub documentation: String,
    pub owners: Vec<Owner>,
    /// Always populated by aggregation, even when blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
    pub licenses: Vec<License>,
    pub references: Vec<Reference>,
    pub citations: Vec<Citation>,
}

/// Individual or team owning the model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Owner {
    pub name: String,
    /// Email address, mailing list or feedback form.
    pub contact: String,
}

impl Owner {
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
        }
    }
}

/// Model version descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Version {
    pub name: String,
    /// Release date; `None` when the form left it blank.
    #[serde(with = "iso_date")]
    pub date: Option<NaiveDate>,
    /// Changes from the previous version.
    pub diff: String,
}

impl Version {
    pub fn new(name: impl Into<String>, date: Option<NaiveDate>, diff: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date,
            diff: diff.into(),
        }
    }

    /// Returns the date as `YYYY-MM-DD`, or an empty string when unset.
    pub fn date_label(&self) -> String {
        self.date
            .map(|date| date.format(iso_date::FORMAT).to_string())
            .unwrap_or_default()
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.date.is_none() && self.diff.is_empty()
    }
}

/// License information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct License {
    /// SPDX identifier or `proprietary`.
    pub identifier: String,
    pub custom_text: String,
}

impl License {
    pub fn new(identifier: impl Into<String>, custom_text: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            custom_text: custom_text.into(),
        }
    }
}

/// Link to research, documentation or other material.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reference {
    pub reference: String,
}

impl Reference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }
}

/// How the model should be cited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Citation {
    /// MLA, APA, Chicago, IEEE...
    pub style: String,
    pub citation: String,
}

impl Citation {
    pub fn new(style: impl Into<String>, citation: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            citation: citation.into(),
        }
    }
}

/// Structured record encode/decode errors.
#[derive(Debug)]
pub enum RecordError {
    Encode(serde_json::Error),
    Decode(serde_json::Error),
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to encode model card JSON: {err}"),
            Self::Decode(err) => write!(f, "failed to decode model card JSON: {err}"),
        }
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) | Self::Decode(err) => Some(err),
        }
    }
}

impl ModelCard {
    pub fn new(model_details: ModelMetadata) -> Self {
        Self { model_details }
    }

    /// Encodes the card as pretty-printed JSON (2-space indent).
    pub fn to_json(&self) -> Result<String, RecordError> {
        serde_json::to_string_pretty(self).map_err(RecordError::Encode)
    }

    /// Decodes a card previously produced by [`ModelCard::to_json`].
    ///
    /// Missing keys decode to empty values.
    pub fn from_json(raw: &str) -> Result<Self, RecordError> {
        serde_json::from_str(raw).map_err(RecordError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::{ModelCard, Version};
    use chrono::NaiveDate;

    #[test]
    fn blank_version_reports_blank_and_empty_date_label() {
        let version = Version::default();
        assert!(version.is_blank());
        assert_eq!(version.date_label(), "");
    }

    #[test]
    fn date_label_uses_iso_format() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        let version = Version::new("1.0", Some(date), "");
        assert_eq!(version.date_label(), "2024-01-01");
        assert!(!version.is_blank());
    }

    #[test]
    fn from_json_rejects_malformed_date() {
        let err = ModelCard::from_json(
            r#"{"modelDetails":{"version":{"name":"","date":"01/02/2024","diff":""}}}"#,
        )
        .expect_err("non-ISO date must be rejected");
        assert!(err.to_string().contains("decode"));
    }

    #[test]
    fn from_json_accepts_empty_object() {
        let card = ModelCard::from_json("{}").expect("empty object should decode");
        assert_eq!(card, ModelCard::default());
    }
}
