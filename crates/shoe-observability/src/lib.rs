//! Structured logging for shoe card rendering.
//!
//! This crate provides:
//! - `RenderId` - Correlation id for one render pass
//! - `StructuredLogger` - Structured logging with render context
//! - `LogBuilder` - Fluent construction of entries with typed fields

mod logging;
mod render_id;

pub use logging::*;
pub use render_id::*;
