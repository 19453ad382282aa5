//! Persisted message records for the `rmqDemo` table.
//!
//! A message record pairs a storage-assigned surrogate identifier with a
//! text payload. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
