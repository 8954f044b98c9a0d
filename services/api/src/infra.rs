use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use enquiry::enquiries::{
    EnquiryId, EnquiryRecord, EnquiryRepository, RepositoryError, StudentEnquiry,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local record store backing the running service.
///
/// Identifiers come from a zero-padded sequence, so lexicographic id order
/// matches creation order and `list_all` can sort on it directly.
#[derive(Default)]
pub(crate) struct InMemoryEnquiryRepository {
    records: Mutex<HashMap<EnquiryId, EnquiryRecord>>,
    sequence: AtomicU64,
}

impl InMemoryEnquiryRepository {
    fn next_id(&self) -> EnquiryId {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        EnquiryId(format!("enq-{seq:06}"))
    }
}

impl EnquiryRepository for InMemoryEnquiryRepository {
    fn insert(
        &self,
        enquiry: StudentEnquiry,
        recorded_at: DateTime<Utc>,
    ) -> Result<EnquiryRecord, RepositoryError> {
        let id = self.next_id();
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
