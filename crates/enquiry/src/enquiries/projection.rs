//! Read-side shapes for stored enquiries.
//!
//! Both projections are pure, total functions of the record; no validation
//! runs on read.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::EnquiryId;
use super::repository::EnquiryRecord;

/// Full read-side shape: every stored attribute, unmodified.
///
/// Absent follow-up notes stay `null` here; only the list projection
/// flattens them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnquiryDetailView {
    pub id: EnquiryId,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub current_location: String,
    pub course_enquiry: String,
    pub training_mode: String,
    pub training_timing: String,
    pub start_time: String,
    pub professional_situation: String,
    pub qualification: String,
    pub experience: String,
    pub referral_source: String,
    pub consent_to_contact: bool,
    pub calling1: Option<String>,
    pub calling2: Option<String>,
    pub calling3: Option<String>,
    pub calling4: Option<String>,
    pub calling5: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row shape for the enquiry table.
///
/// Carries the fixed field subset the table renders; follow-up notes with
/// no stored value become empty strings in this shape only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnquiryListEntry {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub current_location: String,
    pub course_enquiry: String,
    pub training_mode: String,
    pub training_timing: String,
    pub start_time: String,
    pub calling1: String,
    pub calling2: String,
    pub calling3: String,
    pub calling4: String,
    pub calling5: String,
}

fn note_or_empty(note: &Option<String>) -> String {
    note.clone().unwrap_or_default()
}

impl EnquiryRecord {
    /// Project the record into its full detail shape.
    pub fn detail_view(&self) -> EnquiryDetailView {
        EnquiryDetailView {
            id: self.id.clone(),
            name: self.enquiry.name.clone(),
            phone_number: self.enquiry.phone_number.clone(),
            email: self.enquiry.email.clone(),
            current_location: self.enquiry.current_location.clone(),
            course_enquiry: self.enquiry.course_enquiry.clone(),
            training_mode: self.enquiry.training_mode.clone(),
            training_timing: self.enquiry.training_timing.clone(),
            start_time: self.enquiry.start_time.clone(),
            professional_situation: self.enquiry.professional_situation.clone(),
            qualification: self.enquiry.qualification.clone(),
            experience: self.enquiry.experience.clone(),
            referral_source: self.enquiry.referral_source.clone(),
            consent_to_contact: self.enquiry.consent_to_contact,
            calling1: self.enquiry.calling1.clone(),
            calling2: self.enquiry.calling2.clone(),
            calling3: self.enquiry.calling3.clone(),
            calling4: self.enquiry.calling4.clone(),
            calling5: self.enquiry.calling5.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Project the record into its list-table row shape.
    pub fn list_entry(&self) -> EnquiryListEntry {
        EnquiryListEntry {
            name: self.enquiry.name.clone(),
            phone_number: self.enquiry.phone_number.clone(),
            email: self.enquiry.email.clone(),
            current_location: self.enquiry.current_location.clone(),
            course_enquiry: self.enquiry.course_enquiry.clone(),
            training_mode: self.enquiry.training_mode.clone(),
            training_timing: self.enquiry.training_timing.clone(),
            start_time: self.enquiry.start_time.clone(),
            calling1: note_or_empty(&self.enquiry.calling1),
            calling2: note_or_empty(&self.enquiry.calling2),
            calling3: note_or_empty(&self.enquiry.calling3),
            calling4: note_or_empty(&self.enquiry.calling4),
            calling5: note_or_empty(&self.enquiry.calling5),
        }
    }
}
