//! Fixed label catalogs for the enumerated enquiry form fields.
//!
//! Each enumerated field is a tagged set of allowed string values checked
//! by membership, so one check serves all eight fields.

use super::validate::FieldViolation;

/// A fixed catalog of allowed values for one enumerated form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceSet {
    pub field: &'static str,
    pub labels: &'static [&'static str],
}

impl ChoiceSet {
    pub fn contains(&self, value: &str) -> bool {
        self.labels.iter().any(|label| *label == value)
    }

    /// Membership check, reporting the offending value on a miss.
    pub fn check(&self, value: &str) -> Result<(), FieldViolation> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(FieldViolation::InvalidEnumValue {
                field: self.field,
                value: value.to_string(),
            })
        }
    }
}

pub const COURSE_ENQUIRY: ChoiceSet = ChoiceSet {
    field: "course_enquiry",
    labels: &[
        "Professional Starter Testing",
        "Professional Experts with Java Automation",
        "Professional Experts with Python Automation",
        "Professional Experts with Mobile Automation",
        "Professional Experts with API Automation",
        "SDET Xpert",
        "Individual Courses",
        "AI Testing",
        "Playwright",
        "Cypress",
        "Python Development Full Stack",
        "Java Full Stack Development",
        "MERN Stack",
        "UI/UX Designing",
        "AI/ML Engineering",
        "Data Analytics",
        "Diploma in Software Engineering at Testing",
        "Diploma in Software Engineering at Development",
        "Other",
    ],
};

pub const TRAINING_MODE: ChoiceSet = ChoiceSet {
    field: "training_mode",
    labels: &["Offline", "Online", "Hybrid"],
};

pub const TRAINING_TIMING: ChoiceSet = ChoiceSet {
    field: "training_timing",
    labels: &[
        "Morning (7AM Batch)",
        "Evening (8PM Batch)",
        "Anytime in Weekdays",
        "Weekends",
    ],
};

pub const START_TIME: ChoiceSet = ChoiceSet {
    field: "start_time",
    labels: &["Immediate", "After 10 days", "After 15 days", "After 1 Month"],
};

pub const PROFESSIONAL_SITUATION: ChoiceSet = ChoiceSet {
    field: "professional_situation",
    labels: &[
        "Fresher",
        "Currently Working",
        "Willing to Switch from Another Domain",
        "Other",
    ],
};

pub const QUALIFICATION: ChoiceSet = ChoiceSet {
    field: "qualification",
    labels: &["Diploma", "Bachelor's Degree", "Master's Degree", "Other"],
};

pub const EXPERIENCE: ChoiceSet = ChoiceSet {
    field: "experience",
    labels: &[
        "Less than 1 Year or Fresher",
        "1-3 Years",
        "3-5 Years",
        "5+ Years",
    ],
};

pub const REFERRAL_SOURCE: ChoiceSet = ChoiceSet {
    field: "referral_source",
    labels: &[
        "Instagram",
        "WhatsApp Channel",
        "Facebook",
        "LinkedIn",
        "YouTube",
        "Friend Reference",
        "College Reference",
        "Other Social Network",
    ],
};

/// Every enumerated field catalog, in form order.
pub const ALL: [&ChoiceSet; 8] = [
    &COURSE_ENQUIRY,
    &TRAINING_MODE,
    &TRAINING_TIMING,
    &START_TIME,
    &PROFESSIONAL_SITUATION,
    &QUALIFICATION,
    &EXPERIENCE,
    &REFERRAL_SOURCE,
];
