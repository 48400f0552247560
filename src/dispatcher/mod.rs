//! # Dispatcher Module
//!
//! Runs the match → bind → invoke pipeline for one request: looks the path
//! up in the route table, resolves each declared parameter to a raw string
//! (path variable or query entry), coerces it to the declared target type,
//! and calls the operation with the bound arguments.
//!
//! The dispatcher is stateless per call. It holds only an `Arc` to the
//! immutable route table, so clones are cheap and concurrent requests need
//! no locking; handler panics are caught and surfaced as request-local
//! errors.

mod core;

pub use core::{DispatchError, Dispatcher};
