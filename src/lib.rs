//! Tiered Image Dispatch Gateway
//!
//! A gateway that accepts text-to-image generation requests over HTTP,
//! normalizes their parameters, and dispatches each one to a small or large
//! remote executor based on the requested output resolution.

pub mod api;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod executor;

pub use error::{AppError, Result};

use std::sync::Arc;

use executor::pool::ExecutorPool;

/// Application state shared across all handlers. Settings are consumed
/// during startup wiring and not carried here; each request is a pure
/// function of its inputs plus the executor pool.
pub struct AppState {
    pub executors: Arc<ExecutorPool>,
}
