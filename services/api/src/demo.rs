use clap::Args;
use std::sync::Arc;

use enquiry::enquiries::{
    choices, EnquiryService, EnquiryServiceError, EnquirySubmission,
};
use enquiry::error::AppError;

use crate::infra::InMemoryEnquiryRepository;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the allowed-value catalogs before the walkthrough
    #[arg(long)]
    pub(crate) show_choices: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Student enquiry intake demo");

    if args.show_choices {
        println!("\nAllowed values per enumerated field");
        for catalog in choices::ALL {
            println!("- {} ({} values)", catalog.field, catalog.labels.len());
            for label in catalog.labels {
                println!("    {label}");
            }
        }
    }

    let repository = Arc::new(InMemoryEnquiryRepository::default());
    let service = EnquiryService::new(repository);

    println!("\nSubmitting a fresh enquiry");
    let record = match service.submit(sample_submission()) {
        Ok(record) => record,
        Err(err) => {
            println!("  Submission rejected: {err}");
            return Ok(());
        }
    };
    println!(
        "- Accepted {} for {} ({})",
        record.id.0, record.enquiry.name, record.enquiry.course_enquiry
    );
    match serde_json::to_string_pretty(&record.detail_view()) {
        Ok(json) => println!("  Detail payload:\n{json}"),
        Err(err) => println!("  Detail payload unavailable: {err}"),
    }

    println!("\nRecording a follow-up call");
    let mut follow_up = sample_submission();
    follow_up.calling1 = Some("Discussed weekend batch, sending syllabus".to_string());
    match service.revise(&record.id, follow_up) {
        Ok(revised) => println!(
            "- {} updated at {} with note {:?}",
            revised.id.0,
            revised.updated_at,
            revised.enquiry.calling1.as_deref().unwrap_or_default()
        ),
        Err(err) => println!("  Revision rejected: {err}"),
    }

    println!("\nEnquiry table");
    match service.list() {
        Ok(rows) => {
            for row in rows {
                println!(
                    "- {} | {} | {} | {} | calls: [{:?}, {:?}, {:?}, {:?}, {:?}]",
                    row.name,
                    row.phone_number,
                    row.course_enquiry,
                    row.training_mode,
                    row.calling1,
                    row.calling2,
                    row.calling3,
                    row.calling4,
                    row.calling5
                );
            }
        }
        Err(err) => println!("  Table unavailable: {err}"),
    }

    println!("\nSubmitting a form that should bounce");
    let mut broken = sample_submission();
    broken.phone_number = "12345".to_string();
    broken.email = "lead@outlook.com".to_string();
    broken.consent_to_contact = false;
    match service.submit(broken) {
        Ok(record) => println!("  Unexpectedly accepted as {}", record.id.0),
        Err(EnquiryServiceError::Validation(errors)) => {
            println!("  Rejected with {} violation(s):", errors.violations.len());
            for violation in &errors.violations {
                println!("    - {violation}");
            }
        }
        Err(err) => println!("  Rejected for another reason: {err}"),
    }

    Ok(())
}

fn sample_submission() -> EnquirySubmission {
    EnquirySubmission {
        name: "Asha Rao".to_string(),
        phone_number: "9876543210".to_string(),
        email: "asha.rao@gmail.com".to_string(),
        current_location: "Bengaluru".to_string(),
        course_enquiry: "Playwright".to_string(),
        training_mode: "Online".to_string(),
        training_timing: "Weekends".to_string(),
        start_time: "Immediate".to_string(),
        professional_situation: "Fresher".to_string(),
        qualification: "Bachelor's Degree".to_string(),
        experience: "Less than 1 Year or Fresher".to_string(),
        referral_source: "Instagram".to_string(),
        consent_to_contact: true,
        calling1: None,
        calling2: None,
        calling3: None,
        calling4: None,
        calling5: None,
    }
}
