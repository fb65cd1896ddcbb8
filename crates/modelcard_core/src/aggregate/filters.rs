//! Inclusion predicates for optional sub-records.
//!
//! Signatures take `&T` so they plug straight into `Iterator::filter`.

use crate::model::card::{Citation, License, Owner, Reference};

/// An owner is kept when either its name or contact is non-empty.
pub fn include_owner(owner: &Owner) -> bool {
    !owner.name.is_empty() || !owner.contact.is_empty()
}

/// A license is kept when either its identifier or custom text is non-empty.
pub fn include_license(license: &License) -> bool {
    !license.identifier.is_empty() || !license.custom_text.is_empty()
}

pub fn include_reference(reference: &Reference) -> bool {
    !reference.reference.is_empty()
}

/// A citation needs text; a style alone is not enough.
pub fn include_citation(citation: &Citation) -> bool {
    !citation.citation.is_empty()
}

#[cfg(test)]
mod tests {
    use super::{include_citation, include_license, include_owner, include_reference};
    use crate::model::card::{Citation, License, Owner, Reference};

    #[test]
    fn owner_requires_name_or_contact() {
        assert!(!include_owner(&Owner::new("", "")));
        assert!(include_owner(&Owner::new("Alice", "")));
        assert!(include_owner(&Owner::new("", "ml-team@example.com")));
    }

    #[test]
    fn license_requires_identifier_or_custom_text() {
        assert!(!include_license(&License::new("", "")));
        assert!(include_license(&License::new("Apache-2.0", "")));
        assert!(include_license(&License::new("", "All rights reserved.")));
    }

    #[test]
    fn reference_requires_text() {
        assert!(!include_reference(&Reference::new("")));
        assert!(include_reference(&Reference::new("https://arxiv.org/abs/1810.04805")));
    }

    #[test]
    fn citation_style_alone_is_not_enough() {
        assert!(!include_citation(&Citation::new("APA", "")));
        assert!(include_citation(&Citation::new("", "Devlin et al., 2018")));
    }

    #[test]
    fn whitespace_counts_as_content() {
        assert!(include_owner(&Owner::new(" ", "")));
        assert!(include_reference(&Reference::new(" ")));
    }
}
