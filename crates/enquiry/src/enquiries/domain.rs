use serde::{Deserialize, Serialize};

/// Identifier wrapper for persisted enquiries.
///
/// Assigned by the record store on creation and never reissued or changed
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnquiryId(pub String);

fn default_start_time() -> String {
    "Immediate".to_string()
}

/// Raw enquiry form payload as submitted by a prospective student.
///
/// Every field arrives as plain text and is checked by the write-path
/// validation before an entity is constructed; nothing here is trusted.
/// `start_time` defaults when the form omits it, and the five follow-up
/// call notes are independently optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquirySubmission {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub current_location: String,
    pub course_enquiry: String,
    pub training_mode: String,
    pub training_timing: String,
    #[serde(default = "default_start_time")]
    pub start_time: String,
    pub professional_situation: String,
    pub qualification: String,
    pub experience: String,
    pub referral_source: String,
    #[serde(default)]
    pub consent_to_contact: bool,
    #[serde(default)]
    pub calling1: Option<String>,
    #[serde(default)]
    pub calling2: Option<String>,
    #[serde(default)]
    pub calling3: Option<String>,
    #[serde(default)]
    pub calling4: Option<String>,
    #[serde(default)]
    pub calling5: Option<String>,
}

/// The validated field set persisted for one enquiry.
///
/// Construction goes through [`crate::enquiries::validate`], so every
/// instance satisfies the pattern and enumeration rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentEnquiry {
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
}
