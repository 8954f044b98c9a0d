//! Student enquiry intake, validation, and projection pipeline.
//!
//! Raw form payloads enter through [`domain::EnquirySubmission`], pass the
//! collect-all write-path validation in [`validate`], and are persisted via
//! the [`repository::EnquiryRepository`] contract. Read-side shapes live in
//! [`projection`]; the HTTP surface in [`router`].

pub mod choices;
pub mod domain;
pub mod projection;
pub mod repository;
pub mod router;
pub mod service;
pub mod validate;

#[cfg(test)]
mod tests;

pub use choices::ChoiceSet;
pub use domain::{EnquiryId, EnquirySubmission, StudentEnquiry};
pub use projection::{EnquiryDetailView, EnquiryListEntry};
pub use repository::{EnquiryRecord, EnquiryRepository, RepositoryError};
pub use router::enquiry_router;
pub use service::{EnquiryService, EnquiryServiceError};
pub use validate::{
    enquiry_from_submission, validate_email, validate_name, validate_phone, FieldViolation,
    ValidationErrors,
};
