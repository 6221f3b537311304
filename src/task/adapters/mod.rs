//! Adapter implementations for task lifecycle ports.

pub mod clock;
pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;
