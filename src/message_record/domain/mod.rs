//! Domain model for persisted message records.
//!
//! The record is a passive value holder. Identity assignment and lifecycle
//! belong to the repository layer, so nothing here can fail.

mod ids;
mod record;

pub use ids::RecordId;
pub use record::MessageRecord;
