//! Diesel row models for message record persistence.

use super::schema::rmq_demo;
use crate::message_record::domain::{MessageRecord, RecordId};
use diesel::prelude::*;

/// Query result row for message records.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = rmq_demo)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRecordRow {
    /// Identity primary key.
    pub id: i32,
    /// Message payload; `NULL` reads back as an empty message.
    pub message: Option<String>,
}

/// Insert model for message records.
///
/// The identifier is omitted so the identity column assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = rmq_demo)]
pub struct NewMessageRecordRow {
    /// Message payload.
    pub message: Option<String>,
}

impl From<MessageRecordRow> for MessageRecord {
    fn from(row: MessageRecordRow) -> Self {
        Self::with_id(RecordId::new(row.id), row.message.unwrap_or_default())
    }
}

impl From<&MessageRecord> for NewMessageRecordRow {
    fn from(record: &MessageRecord) -> Self {
        Self {
            message: Some(record.message().to_owned()),
        }
    }
}
