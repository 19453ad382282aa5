//! In-memory repository for message records.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::message_record::{
    domain::{MessageRecord, RecordId},
    ports::{MessageRecordError, MessageRecordRepository, MessageRecordResult},
};

/// Thread-safe in-memory message record repository.
///
/// Mirrors an identity column: identifiers start at 1 and are never reused.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageRecordRepository {
    state: Arc<RwLock<InMemoryRecordState>>,
}

#[derive(Debug, Default)]
struct InMemoryRecordState {
    records: BTreeMap<RecordId, String>,
    last_id: i32,
}

impl InMemoryMessageRecordRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn starting_after(last_id: i32) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryRecordState {
                records: BTreeMap::new(),
                last_id,
            })),
        }
    }
}

fn persistence_error(err: impl ToString) -> MessageRecordError {
    MessageRecordError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl MessageRecordRepository for InMemoryMessageRecordRepository {
    async fn insert(&self, record: &MessageRecord) -> MessageRecordResult<MessageRecord> {
        if let Some(id) = record.id() {
            return Err(MessageRecordError::AlreadyPersisted(id));
        }

        let mut state = self.state.write().map_err(persistence_error)?;
        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| persistence_error("record identity sequence exhausted"))?;
        state.last_id = next;

        let id = RecordId::new(next);
        state.records.insert(id, record.message().to_owned());
        Ok(MessageRecord::with_id(id, record.message()))
    }

    async fn update(&self, record: &MessageRecord) -> MessageRecordResult<()> {
        let id = record.id().ok_or(MessageRecordError::NotPersisted)?;
        let mut state = self.state.write().map_err(persistence_error)?;
        let stored = state
            .records
            .get_mut(&id)
            .ok_or(MessageRecordError::NotFound(id))?;
        record.message().clone_into(stored);
        Ok(())
    }

    async fn find_by_id(&self, id: RecordId) -> MessageRecordResult<Option<MessageRecord>> {
        let state = self.state.read().map_err(persistence_error)?;
        Ok(state
            .records
            .get(&id)
            .map(|message| MessageRecord::with_id(id, message.as_str())))
    }

    async fn list_all(&self) -> MessageRecordResult<Vec<MessageRecord>> {
        let state = self.state.read().map_err(persistence_error)?;
        Ok(state
            .records
            .iter()
            .map(|(id, message)| MessageRecord::with_id(*id, message.as_str()))
            .collect())
    }

    async fn delete(&self, id: RecordId) -> MessageRecordResult<()> {
        let mut state = self.state.write().map_err(persistence_error)?;
        state
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or(MessageRecordError::NotFound(id))
    }

    async fn count(&self) -> MessageRecordResult<u64> {
        let state = self.state.read().map_err(persistence_error)?;
        u64::try_from(state.records.len()).map_err(MessageRecordError::invalid_persisted_data)
    }
}
