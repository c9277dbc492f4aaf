//! Configuration module

pub mod settings;

pub use settings::{ExecutorConfig, ExecutorsConfig, LoggingConfig, ServerConfig, Settings};
