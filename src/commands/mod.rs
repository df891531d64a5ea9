// Command handlers module
pub mod check;
pub mod generate_config;
pub mod version;

// Re-exports for cleaner imports
pub use check::execute as check;
pub use generate_config::execute as generate_config;
pub use version::execute as version;
