// Core domain logic for the postqueue check
pub mod analyzer;
pub mod categories;
pub mod config;
pub mod monitor;
pub mod queue_source;

pub use analyzer::{analyze, QueueMetrics, QUEUE_METRIC};
pub use categories::ExcludeCategories;
pub use config::ConfigFile;
pub use monitor::{CheckResult, CheckStatus, Monitor};
pub use queue_source::{PostqueueCommand, QueueSource};
