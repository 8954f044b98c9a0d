use std::sync::Arc;

use chrono::Utc;

use super::domain::{EnquiryId, EnquirySubmission};
use super::projection::EnquiryListEntry;
use super::repository::{EnquiryRecord, EnquiryRepository, RepositoryError};
use super::validate::{enquiry_from_submission, ValidationErrors};

/// Facade composing write-path validation with the record store.
pub struct EnquiryService<R> {
    repository: Arc<R>,
}

impl<R> EnquiryService<R>
where
    R: EnquiryRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Accept a new enquiry.
    ///
    /// Every validation rule runs before the store is touched; a rejected
    /// submission causes no write.
    pub fn submit(
        &self,
        submission: EnquirySubmission,
    ) -> Result<EnquiryRecord, EnquiryServiceError> {
        let enquiry = enquiry_from_submission(submission)?;
        let record = self.repository.insert(enquiry, Utc::now())?;
        Ok(record)
    }

    /// Replace an existing enquiry's field set.
    ///
    /// The full write-path validation runs again over the full field set;
    /// the store keeps `created_at` and refreshes `updated_at`.
    pub fn revise(
        &self,
        id: &EnquiryId,
        submission: EnquirySubmission,
    ) -> Result<EnquiryRecord, EnquiryServiceError> {
        let enquiry = enquiry_from_submission(submission)?;
        let record = self.repository.update(id, enquiry, Utc::now())?;
        Ok(record)
    }

    pub fn get(&self, id: &EnquiryId) -> Result<EnquiryRecord, EnquiryServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn remove(&self, id: &EnquiryId) -> Result<(), EnquiryServiceError> {
        self.repository.delete(id)?;
        Ok(())
    }

    /// Table rows for every stored enquiry, most recent first.
    pub fn list(&self) -> Result<Vec<EnquiryListEntry>, EnquiryServiceError> {
        let records = self.repository.list_all()?;
        Ok(records.iter().map(EnquiryRecord::list_entry).collect())
    }
}

/// Error raised by the enquiry service.
#[derive(Debug, thiserror::Error)]
pub enum EnquiryServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
