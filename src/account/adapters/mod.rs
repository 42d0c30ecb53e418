//! Adapter implementations for the account repository port.

pub mod memory;
