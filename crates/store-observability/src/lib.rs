//! Observability for the GameStore workspace.
//!
//! This crate provides:
//! - `RequestId` - Unique identifier correlating the entries of one operation
//! - `StructuredLogger` - Structured logging with request context

mod logging;
mod request;

pub use logging::*;
pub use request::RequestId;
