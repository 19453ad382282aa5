//! Adapter implementations for message record persistence.

pub mod memory;
pub mod postgres;
