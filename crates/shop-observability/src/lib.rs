//! Observability for the SoccerShop storefront.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with session context, usable as
//!   a cart observer
//! - `EventRecorder` / `Recording` - In-memory cart event log, exportable as JSON

mod cart;
mod logging;
mod recorder;

pub use logging::*;
pub use recorder::*;

use thiserror::Error;

/// Errors raised while configuring loggers or handling recordings.
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// Unknown log level name.
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    /// Unknown log format name.
    #[error("Unknown log format: {0} (expected json or human)")]
    UnknownFormat(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
