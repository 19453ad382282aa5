//! `PostgreSQL` adapters for message record persistence.

mod models;
mod repository;
mod schema;

pub use repository::{
    CREATE_TABLE_SQL, PostgresMessageRecordRepository, RecordPgPool, apply_schema, connect,
};
