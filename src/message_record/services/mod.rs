//! Application services for message records.

mod store;

pub use store::{MessageRecordService, MessageRecordServiceError, MessageRecordServiceResult};
