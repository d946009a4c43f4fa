//! Observability for the storefront client.
//!
//! This crate provides:
//! - `PageId` - Identifier correlating every log line of one page load
//! - `StructuredLogger` - Structured logging with page and component context
//! - `LogSink` - Where entries go (`tracing` events, or memory for inspection)

mod logging;
mod page;

pub use logging::*;
pub use page::*;
