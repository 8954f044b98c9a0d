use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::enquiries::domain::{EnquiryId, EnquirySubmission, StudentEnquiry};
use crate::enquiries::repository::{EnquiryRecord, EnquiryRepository, RepositoryError};
use crate::enquiries::router::enquiry_router;
use crate::enquiries::service::EnquiryService;

pub(super) fn submission() -> EnquirySubmission {
    EnquirySubmission {
        name: "Asha Rao".to_string(),
        phone_number: "9876543210".to_string(),
        email: "asha@gmail.com".to_string(),
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

pub(super) fn second_submission() -> EnquirySubmission {
    EnquirySubmission {
        name: "Rohan Mehta".to_string(),
        phone_number: "8123456790".to_string(),
        email: "rohan@gmail.com".to_string(),
        current_location: "Pune".to_string(),
        course_enquiry: "MERN Stack".to_string(),
        training_mode: "Offline".to_string(),
        training_timing: "Morning (7AM Batch)".to_string(),
        start_time: "After 10 days".to_string(),
        professional_situation: "Currently Working".to_string(),
        qualification: "Master's Degree".to_string(),
        experience: "1-3 Years".to_string(),
        referral_source: "LinkedIn".to_string(),
        consent_to_contact: true,
        calling1: Some("Asked for a callback on Monday".to_string()),
        calling2: None,
        calling3: None,
        calling4: None,
        calling5: None,
    }
}

pub(super) fn build_service() -> (EnquiryService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = EnquiryService::new(repository.clone());
    (service, repository)
}

pub(super) fn enquiry_router_with_service(
    service: EnquiryService<MemoryRepository>,
) -> axum::Router {
    enquiry_router(Arc::new(service))
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<HashMap<EnquiryId, EnquiryRecord>>,
    sequence: AtomicU64,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl EnquiryRepository for MemoryRepository {
    fn insert(
        &self,
        enquiry: StudentEnquiry,
        recorded_at: DateTime<Utc>,
    ) -> Result<EnquiryRecord, RepositoryError> {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let id = EnquiryId(format!("enq-{seq:06}"));
        let record = EnquiryRecord {
            id: id.clone(),
            enquiry,
            created_at: recorded_at,
            updated_at: recorded_at,
        };
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .insert(id, record.clone());
        Ok(record)
    }

    fn update(
        &self,
        id: &EnquiryId,
        enquiry: StudentEnquiry,
        revised_at: DateTime<Utc>,
    ) -> Result<EnquiryRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.get_mut(id) {
            Some(stored) => {
                stored.enquiry = enquiry;
                stored.updated_at = revised_at;
                Ok(stored.clone())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &EnquiryId) -> Result<Option<EnquiryRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn delete(&self, id: &EnquiryId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }

    fn list_all(&self) -> Result<Vec<EnquiryRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<EnquiryRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| b.id.0.cmp(&a.id.0));
        Ok(records)
    }
}

pub(super) struct UnavailableRepository;

impl EnquiryRepository for UnavailableRepository {
    fn insert(
        &self,
        _enquiry: StudentEnquiry,
        _recorded_at: DateTime<Utc>,
    ) -> Result<EnquiryRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(
        &self,
        _id: &EnquiryId,
        _enquiry: StudentEnquiry,
        _revised_at: DateTime<Utc>,
    ) -> Result<EnquiryRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &EnquiryId) -> Result<Option<EnquiryRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn delete(&self, _id: &EnquiryId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list_all(&self) -> Result<Vec<EnquiryRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
