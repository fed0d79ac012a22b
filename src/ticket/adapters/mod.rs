//! Adapter implementations for ticket ports.

pub mod memory;
