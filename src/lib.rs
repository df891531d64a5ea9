// check-postqueue Library - Public API

// Re-export error types
pub mod error;
pub use error::{CheckError, Result};

// Module declarations
pub mod commands;
pub mod core;

// Re-export commonly used types
pub use crate::core::config::ConfigFile;
pub use crate::core::monitor::{CheckResult, CheckStatus};

// Initialize logging
pub fn init_logging(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
