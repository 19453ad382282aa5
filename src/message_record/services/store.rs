//! Service layer for storing and retrieving message records.
//!
//! Provides [`MessageRecordService`] which records new messages, rewrites
//! stored payloads, and exposes lookup and removal over any
//! [`MessageRecordRepository`].

use crate::message_record::{
    domain::{MessageRecord, RecordId},
    ports::{MessageRecordError, MessageRecordRepository},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for message record operations.
#[derive(Debug, Error)]
pub enum MessageRecordServiceError {
    /// The record does not exist.
    #[error("message record not found: {0}")]
    NotFound(RecordId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] MessageRecordError),
}

/// Result type for message record service operations.
pub type MessageRecordServiceResult<T> = Result<T, MessageRecordServiceError>;

/// Message record orchestration service.
#[derive(Clone)]
pub struct MessageRecordService<R>
where
    R: MessageRecordRepository,
{
    repository: Arc<R>,
}

impl<R> MessageRecordService<R>
where
    R: MessageRecordRepository,
{
    /// Creates a new message record service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores `message` as a new record and returns it with its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRecordServiceError::Repository`] when the repository
    /// rejects persistence.
    pub async fn record(
        &self,
        message: impl Into<String> + Send,
    ) -> MessageRecordServiceResult<MessageRecord> {
        let stored = self
            .repository
            .insert(&MessageRecord::unsaved(message))
            .await?;
        info!(id = ?stored.id(), "message recorded");
        Ok(stored)
    }

    /// Replaces the payload of an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRecordServiceError::NotFound`] when no record has
    /// the identifier, or [`MessageRecordServiceError::Repository`] when
    /// persistence fails.
    pub async fn rewrite(
        &self,
        id: RecordId,
        message: impl Into<String> + Send,
    ) -> MessageRecordServiceResult<MessageRecord> {
        let record = MessageRecord::with_id(id, message);
        self.repository
            .update(&record)
            .await
            .map_err(surface_not_found)?;
        info!(%id, "message rewritten");
        Ok(record)
    }

    /// Finds a record by identifier.
    ///
    /// Returns `Ok(None)` when no record has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRecordServiceError::Repository`] when lookup fails.
    pub async fn find(&self, id: RecordId) -> MessageRecordServiceResult<Option<MessageRecord>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Lists every stored record in identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRecordServiceError::Repository`] when lookup fails.
    pub async fn list(&self) -> MessageRecordServiceResult<Vec<MessageRecord>> {
        let records = self.repository.list_all().await?;
        debug!(count = records.len(), "listed message records");
        Ok(records)
    }

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRecordServiceError::NotFound`] when no record has
    /// the identifier, or [`MessageRecordServiceError::Repository`] when
    /// persistence fails.
    pub async fn remove(&self, id: RecordId) -> MessageRecordServiceResult<()> {
        self.repository
            .delete(id)
            .await
            .map_err(surface_not_found)?;
        info!(%id, "message removed");
        Ok(())
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRecordServiceError::Repository`] when counting
    /// fails.
    pub async fn count(&self) -> MessageRecordServiceResult<u64> {
        Ok(self.repository.count().await?)
    }
}

fn surface_not_found(err: MessageRecordError) -> MessageRecordServiceError {
    match err {
        MessageRecordError::NotFound(missing) => MessageRecordServiceError::NotFound(missing),
        other => MessageRecordServiceError::Repository(other),
    }
}
