//! Raw submission values for one submit action.

use crate::form::fields::{
    parse_reference_slot, FIELD_CITATION_STYLE, FIELD_CITATION_TEXT, FIELD_DOCUMENTATION,
    FIELD_LICENSE_CUSTOM_TEXT, FIELD_LICENSE_IDENTIFIER, FIELD_NAME, FIELD_OVERVIEW,
    FIELD_OWNER_CONTACT, FIELD_OWNER_NAME, FIELD_PATH, FIELD_VERSION_DATE, FIELD_VERSION_DIFF,
    FIELD_VERSION_NAME,
};
use crate::model::iso_date;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Submission validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    UnknownField(String),
    ReferenceSlotOutOfRange { slot: usize, slots: usize },
    TooManyReferences { provided: usize, slots: usize },
    InvalidVersionDate(String),
}

impl Display for SubmissionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField(key) => write!(f, "unknown form field: {key}"),
            Self::ReferenceSlotOutOfRange { slot, slots } => {
                write!(f, "reference slot {slot} is outside 1..={slots}")
            }
            Self::TooManyReferences { provided, slots } => write!(
                f,
                "{provided} references submitted but the form has {slots} slot(s)"
            ),
            Self::InvalidVersionDate(value) => write!(
                f,
                "version date `{value}` is not a YYYY-MM-DD calendar date"
            ),
        }
    }
}

impl Error for SubmissionError {}

/// Flat field values of one form submission.
///
/// Strings are kept verbatim; inclusion rules are applied later by the
/// aggregator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub name: String,
    pub path: String,
    pub overview: String,
    pub documentation: String,
    pub owner_name: String,
    pub owner_contact: String,
    pub version_name: String,
    /// Raw date text; blank or `YYYY-MM-DD`.
    pub version_date: String,
    pub version_diff: String,
    pub license_identifier: String,
    pub license_custom_text: String,
    /// Reference slots in form order, empty slots included.
    pub references: Vec<String>,
    pub citation_style: String,
    pub citation_text: String,
}

impl FormSubmission {
    /// Builds a submission from a flat `key -> value` mapping.
    ///
    /// Reference slots missing from the mapping are left empty so the batch
    /// always has `reference_slots` entries.
    ///
    /// # Errors
    /// - `UnknownField` for keys outside the field catalog.
    /// - `ReferenceSlotOutOfRange` for `reference.N` with N outside `1..=reference_slots`.
    pub fn from_fields(
        fields: &BTreeMap<String, String>,
        reference_slots: usize,
    ) -> Result<Self, SubmissionError> {
        let mut submission = Self {
            references: vec![String::new(); reference_slots],
            ..Self::default()
        };

        for (key, value) in fields {
            let value = value.clone();
            match key.as_str() {
                FIELD_NAME => submission.name = value,
                FIELD_PATH => submission.path = value,
                FIELD_OVERVIEW => submission.overview = value,
                FIELD_DOCUMENTATION => submission.documentation = value,
                FIELD_OWNER_NAME => submission.owner_name = value,
                FIELD_OWNER_CONTACT => submission.owner_contact = value,
                FIELD_VERSION_NAME => submission.version_name = value,
                FIELD_VERSION_DATE => submission.version_date = value,
                FIELD_VERSION_DIFF => submission.version_diff = value,
                FIELD_LICENSE_IDENTIFIER => submission.license_identifier = value,
                FIELD_LICENSE_CUSTOM_TEXT => submission.license_custom_text = value,
                FIELD_CITATION_STYLE => submission.citation_style = value,
                FIELD_CITATION_TEXT => submission.citation_text = value,
                other => {
                    let slot = parse_reference_slot(other)
                        .ok_or_else(|| SubmissionError::UnknownField(other.to_string()))?;
                    if slot == 0 || slot > reference_slots {
                        return Err(SubmissionError::ReferenceSlotOutOfRange {
                            slot,
                            slots: reference_slots,
                        });
                    }
                    submission.references[slot - 1] = value;
                }
            }
        }

        Ok(submission)
    }

    /// Checks the submission against the configured reference batch size.
    pub fn validate(&self, reference_slots: usize) -> Result<(), SubmissionError> {
        if self.references.len() > reference_slots {
            return Err(SubmissionError::TooManyReferences {
                provided: self.references.len(),
                slots: reference_slots,
            });
        }
        parse_version_date(&self.version_date)?;
        Ok(())
    }
}

/// Parses raw version date text.
///
/// Blank (after trimming) yields `None`; anything other than a valid
/// `YYYY-MM-DD` calendar date is rejected, including unpadded fields and
/// signed or five-digit years.
pub fn parse_version_date(raw: &str) -> Result<Option<NaiveDate>, SubmissionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    iso_date::parse_strict(trimmed)
        .map(Some)
        .ok_or_else(|| SubmissionError::InvalidVersionDate(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{parse_version_date, FormSubmission, SubmissionError};
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn from_fields_maps_catalog_keys() {
        let submission = FormSubmission::from_fields(
            &fields(&[
                ("name", "BERT"),
                ("owner.name", "Jane Doe"),
                ("version.date", "2024-01-01"),
                ("license.custom_text", "custom"),
                ("reference.2", "https://example.com"),
                ("citation.citation", "Devlin et al., 2018"),
            ]),
            3,
        )
        .expect("catalog keys should map");

        assert_eq!(submission.name, "BERT");
        assert_eq!(submission.owner_name, "Jane Doe");
        assert_eq!(submission.version_date, "2024-01-01");
        assert_eq!(submission.license_custom_text, "custom");
        assert_eq!(
            submission.references,
            vec![String::new(), "https://example.com".to_string(), String::new()]
        );
        assert_eq!(submission.citation_text, "Devlin et al., 2018");
    }

    #[test]
    fn from_fields_with_empty_mapping_yields_blank_slots() {
        let submission =
            FormSubmission::from_fields(&BTreeMap::new(), 3).expect("empty mapping is valid");
        assert_eq!(submission.references, vec![String::new(); 3]);
        assert!(submission.name.is_empty());
    }

    #[test]
    fn from_fields_rejects_unknown_key() {
        let err = FormSubmission::from_fields(&fields(&[("owner.email", "x")]), 3)
            .expect_err("unknown key must be rejected");
        assert_eq!(err, SubmissionError::UnknownField("owner.email".to_string()));
    }

    #[test]
    fn from_fields_rejects_out_of_range_reference_slot() {
        for key in ["reference.0", "reference.4"] {
            let err = FormSubmission::from_fields(&fields(&[(key, "x")]), 3)
                .expect_err("slot outside batch must be rejected");
            assert!(matches!(
                err,
                SubmissionError::ReferenceSlotOutOfRange { slots: 3, .. }
            ));
        }
    }

    #[test]
    fn validate_rejects_oversized_reference_batch() {
        let submission = FormSubmission {
            references: vec!["a".to_string(); 4],
            ..FormSubmission::default()
        };
        assert_eq!(
            submission.validate(3),
            Err(SubmissionError::TooManyReferences {
                provided: 4,
                slots: 3
            })
        );
        submission.validate(4).expect("batch within slots is valid");
    }

    #[test]
    fn parse_version_date_accepts_blank_and_iso_dates() {
        assert_eq!(parse_version_date("").expect("blank"), None);
        assert_eq!(parse_version_date("   ").expect("whitespace"), None);
        assert_eq!(
            parse_version_date(" 2024-01-01 ").expect("iso date"),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
    }

    #[test]
    fn parse_version_date_rejects_malformed_values() {
        for raw in [
            "2024-13-01",
            "2024-02-30",
            "01/02/2024",
            "yesterday",
            "2024-1-1",
            "+12024-01-01",
            "-0001-01-01",
        ] {
            let err = parse_version_date(raw).expect_err("malformed date must be rejected");
            assert_eq!(err, SubmissionError::InvalidVersionDate(raw.to_string()));
        }
    }
}
