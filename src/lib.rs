//! rmq-demo: persisted message records.
//!
//! This crate stores message records (a storage-assigned identifier and a
//! text payload) in the `rmqDemo` table.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`message_record`]: Record type, repository port, adapters and service
//! - [`config`]: Store configuration from the environment
//! - [`logging`]: Tracing subscriber setup

pub mod config;
pub mod logging;
pub mod message_record;
