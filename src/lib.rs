// VHC Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, VhcError};

// Module declarations
pub mod client;
pub mod commands;
pub mod core;

// Re-export commonly used types
pub use crate::core::runtime_check::{
    evaluate, CheckMode, EvaluationResult, HostRuntimeSnapshot, Severity,
};

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();
}
