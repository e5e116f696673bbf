//! This crate is intended to contain code that is required to provide or
//! improve the observability of a system. That includes initialization logic
//! for logging as well as helpers for carrying tracing context across
//! service boundaries.

pub mod distributed;
pub mod tracing;
