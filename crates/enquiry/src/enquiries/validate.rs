//! Write-path validation for enquiry submissions.
//!
//! The three field predicates are pure and side-effect free. The intake
//! transform runs every rule and collects all violations, so a rejected
//! submission reports each failing field instead of only the first one.

use serde::Serialize;

use super::choices;
use super::domain::{EnquirySubmission, StudentEnquiry};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum FieldViolation {
    /// Value fails a pattern or length rule.
    #[error("{field} does not match the required format")]
    InvalidFormat { field: &'static str },
    /// Value is not a member of the field's fixed label set.
    #[error("{value:?} is not an allowed value for {field}")]
    InvalidEnumValue { field: &'static str, value: String },
    /// The consent flag was not granted.
    #[error("consent to contact is required to submit an enquiry")]
    ConsentRequired,
}

/// Every violation found in one submission, in form-field order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[error("enquiry rejected with {} validation failure(s)", .violations.len())]
pub struct ValidationErrors {
    pub violations: Vec<FieldViolation>,
}

/// Accepts exactly 10 ASCII digits with a leading 6, 7, 8, or 9.
pub fn validate_phone(value: &str) -> Result<(), FieldViolation> {
    let leading_ok = matches!(value.chars().next(), Some('6'..='9'));
    if leading_ok && value.len() == 10 && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(FieldViolation::InvalidFormat {
            field: "phone_number",
        })
    }
}

/// Accepts any address carrying the literal `@gmail.com` suffix.
///
/// The match is case-sensitive and no other address rule is applied; this
/// is deliberately not RFC address validation.
pub fn validate_email(value: &str) -> Result<(), FieldViolation> {
    if value.ends_with("@gmail.com") {
        Ok(())
    } else {
        Err(FieldViolation::InvalidFormat { field: "email" })
    }
}

/// Character-class check only: ASCII letters and spaces, at least one char.
///
/// The 2-100 length bound is enforced where the entity is constructed, not
/// here, so single-letter input passes this predicate.
pub fn validate_name(value: &str) -> Result<(), FieldViolation> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        Ok(())
    } else {
        Err(FieldViolation::InvalidFormat { field: "name" })
    }
}

/// Validate a raw submission and produce the persistable field set.
///
/// Rules run in form-field order: name (character class, then the entity
/// length bound), phone, email, location, the eight enumerated fields,
/// and finally consent. Nothing is persisted here; the caller owns the
/// store write.
pub fn enquiry_from_submission(
    submission: EnquirySubmission,
) -> Result<StudentEnquiry, ValidationErrors> {
    let mut violations = Vec::new();

    match validate_name(&submission.name) {
        // Entity-level rule on top of the character-class predicate.
        Ok(()) if !(2..=100).contains(&submission.name.len()) => {
            violations.push(FieldViolation::InvalidFormat { field: "name" });
        }
        Ok(()) => {}
        Err(violation) => violations.push(violation),
    }

    if let Err(violation) = validate_phone(&submission.phone_number) {
        violations.push(violation);
    }
    if let Err(violation) = validate_email(&submission.email) {
        violations.push(violation);
    }

    let location_len = submission.current_location.chars().count();
    if location_len == 0 || location_len > 255 {
        violations.push(FieldViolation::InvalidFormat {
            field: "current_location",
        });
    }

    let enumerated = [
        (&choices::COURSE_ENQUIRY, &submission.course_enquiry),
        (&choices::TRAINING_MODE, &submission.training_mode),
        (&choices::TRAINING_TIMING, &submission.training_timing),
        (&choices::START_TIME, &submission.start_time),
        (
            &choices::PROFESSIONAL_SITUATION,
            &submission.professional_situation,
        ),
        (&choices::QUALIFICATION, &submission.qualification),
        (&choices::EXPERIENCE, &submission.experience),
        (&choices::REFERRAL_SOURCE, &submission.referral_source),
    ];
    for (catalog, value) in enumerated {
        if let Err(violation) = catalog.check(value) {
            violations.push(violation);
        }
    }

    if !submission.consent_to_contact {
        violations.push(FieldViolation::ConsentRequired);
    }

    if !violations.is_empty() {
        return Err(ValidationErrors { violations });
    }

    Ok(StudentEnquiry {
        name: submission.name,
        phone_number: submission.phone_number,
        email: submission.email,
        current_location: submission.current_location,
        course_enquiry: submission.course_enquiry,
        training_mode: submission.training_mode,
        training_timing: submission.training_timing,
        start_time: submission.start_time,
        professional_situation: submission.professional_situation,
        qualification: submission.qualification,
        experience: submission.experience,
        referral_source: submission.referral_source,
        consent_to_contact: submission.consent_to_contact,
        calling1: submission.calling1,
        calling2: submission.calling2,
        calling3: submission.calling3,
        calling4: submission.calling4,
        calling5: submission.calling5,
    })
}
