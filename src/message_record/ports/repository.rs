//! Repository port for message record persistence.

use crate::message_record::domain::{MessageRecord, RecordId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for message record repository operations.
pub type MessageRecordResult<T> = Result<T, MessageRecordError>;

/// Message record persistence contract.
///
/// Implementations own identity assignment: identifiers start at 1, grow
/// monotonically, and are never reused after a delete.
#[async_trait]
pub trait MessageRecordRepository: Send + Sync {
    /// Stores an unsaved record and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRecordError::AlreadyPersisted`] when the record
    /// already carries an identifier.
    async fn insert(&self, record: &MessageRecord) -> MessageRecordResult<MessageRecord>;

    /// Overwrites the payload of a persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRecordError::NotPersisted`] when the record has no
    /// identifier or [`MessageRecordError::NotFound`] when no stored record
    /// has that identifier.
    async fn update(&self, record: &MessageRecord) -> MessageRecordResult<()>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(&self, id: RecordId) -> MessageRecordResult<Option<MessageRecord>>;

    /// Returns every stored record in ascending identifier order.
    async fn list_all(&self) -> MessageRecordResult<Vec<MessageRecord>>;

    /// Deletes a record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRecordError::NotFound`] when the record does not
    /// exist.
    async fn delete(&self, id: RecordId) -> MessageRecordResult<()>;

    /// Returns the number of stored records.
    async fn count(&self) -> MessageRecordResult<u64>;

    /// Inserts unsaved records and updates persisted ones.
    ///
    /// Returns the record as stored.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::insert`] or [`Self::update`].
    async fn save(&self, record: &MessageRecord) -> MessageRecordResult<MessageRecord> {
        if record.is_persisted() {
            self.update(record).await?;
            Ok(record.clone())
        } else {
            self.insert(record).await
        }
    }
}

/// Errors returned by message record repository implementations.
#[derive(Debug, Clone, Error)]
pub enum MessageRecordError {
    /// Insert was called with a record that already has an identifier.
    #[error("record already persisted with identifier {0}")]
    AlreadyPersisted(RecordId),

    /// Update was called with a record that has no identifier.
    #[error("record has not been persisted")]
    NotPersisted,

    /// No record has the given identifier.
    #[error("record not found: {0}")]
    NotFound(RecordId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MessageRecordError {
    /// Wraps a data-quality or conversion error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
