//! Submission aggregation.
//!
//! # Responsibility
//! - Turn one `FormSubmission` into a `ModelMetadata` record.
//! - Apply sub-record inclusion rules exactly once.
//!
//! # Invariants
//! - Aggregation is pure: same submission, same record.
//! - `version` is always present, even when every version field is blank.
//! - Included entries keep submission order.

pub mod filters;

use crate::form::submission::{parse_version_date, FormSubmission, SubmissionError};
use crate::model::card::{Citation, License, ModelMetadata, Owner, Reference, Version};
use filters::{include_citation, include_license, include_owner, include_reference};

/// Builds the metadata record for one submission.
///
/// # Errors
/// - `InvalidVersionDate` when the version date is neither blank nor `YYYY-MM-DD`.
pub fn aggregate_submission(submission: &FormSubmission) -> Result<ModelMetadata, SubmissionError> {
    let owner = Owner::new(&submission.owner_name, &submission.owner_contact);
    let license = License::new(
        &submission.license_identifier,
        &submission.license_custom_text,
    );
    let citation = Citation::new(&submission.citation_style, &submission.citation_text);
    let version = Version::new(
        &submission.version_name,
        parse_version_date(&submission.version_date)?,
        &submission.version_diff,
    );

    Ok(ModelMetadata {
        name: submission.name.clone(),
        path: submission.path.clone(),
        overview: submission.overview.clone(),
        documentation: submission.documentation.clone(),
        owners: Some(owner).into_iter().filter(include_owner).collect(),
        version: Some(version),
        licenses: Some(license).into_iter().filter(include_license).collect(),
        references: submission
            .references
            .iter()
            .map(Reference::new)
            .filter(include_reference)
            .collect(),
        citations: Some(citation).into_iter().filter(include_citation).collect(),
    })
}
