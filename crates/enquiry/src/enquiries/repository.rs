use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{EnquiryId, StudentEnquiry};

/// A persisted enquiry: the validated field set plus store-owned metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryRecord {
    pub id: EnquiryId,
    pub enquiry: StudentEnquiry,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Storage abstraction so the service module can be exercised in isolation.
///
/// Implementations own identifier assignment and arbitrate concurrent
/// writes to the same record (last write wins is acceptable); the service
/// layer performs no locking, retries, or re-validation on what they
/// return.
pub trait EnquiryRepository: Send + Sync {
    /// Persist a new enquiry, assigning its identifier and stamping both
    /// timestamps with `recorded_at`.
    fn insert(
        &self,
        enquiry: StudentEnquiry,
        recorded_at: DateTime<Utc>,
    ) -> Result<EnquiryRecord, RepositoryError>;

    /// Overwrite the stored field set for `id`, preserving `created_at`
    /// and stamping `updated_at` with `revised_at`.
    fn update(
        &self,
        id: &EnquiryId,
        enquiry: StudentEnquiry,
        revised_at: DateTime<Utc>,
    ) -> Result<EnquiryRecord, RepositoryError>;

    fn fetch(&self, id: &EnquiryId) -> Result<Option<EnquiryRecord>, RepositoryError>;

    fn delete(&self, id: &EnquiryId) -> Result<(), RepositoryError>;

    /// All records, most recently created first.
    fn list_all(&self) -> Result<Vec<EnquiryRecord>, RepositoryError>;
}

/// Error enumeration for record store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("enquiry not found")]
    NotFound,
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}
