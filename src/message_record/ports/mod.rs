//! Port contracts for message record persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the record
//! service.

pub mod repository;

pub use repository::{MessageRecordError, MessageRecordRepository, MessageRecordResult};
