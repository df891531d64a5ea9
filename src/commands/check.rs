//! The check itself: resolve settings, fetch the queue listing, classify,
//! and evaluate thresholds.

use clap::ArgMatches;
use log::debug;

use crate::core::analyzer;
use crate::core::categories::ExcludeCategories;
use crate::core::config::{self, ConfigFile};
use crate::core::monitor::{CheckResult, Monitor};
use crate::core::queue_source::{PostqueueCommand, QueueSource};
use crate::error::{CheckError, Result};

/// Immutable per-run settings, assembled once from flags and the optional
/// config file before any work happens
#[derive(Debug)]
pub struct CheckSettings {
    pub warning: i64,
    pub critical: i64,
    pub postqueue_path: String,
    pub categories: ExcludeCategories,
}

impl CheckSettings {
    /// Resolve flags plus the optional config file into settings.
    ///
    /// The config file, when given, overrides the command path and replaces
    /// the category set; thresholds come from flags only.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let warning = matches.get_one::<i64>("warning").copied().unwrap_or(100);
        let critical = matches.get_one::<i64>("critical").copied().unwrap_or(200);

        let mut postqueue_path = matches
            .get_one::<String>("path")
            .cloned()
            .unwrap_or_else(|| config::DEFAULT_POSTQUEUE_PATH.to_string());
        let mut category_patterns = None;

        if let Some(config_file) = matches.get_one::<String>("config") {
            let file = ConfigFile::load(config_file)?;
            if let Some(path) = file.postqueue_path {
                postqueue_path = path;
            }
            category_patterns = file.exclude_msg_categories;
        }

        let categories = ExcludeCategories::from_patterns(
            &category_patterns.unwrap_or_else(config::default_msg_categories),
        )?;

        let settings = Self {
            warning,
            critical,
            postqueue_path,
            categories,
        };
        debug!("settings: '{:?}'", settings);
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.postqueue_path.is_empty() {
            return Err(CheckError::validation("postqueue path is required"));
        }
        if self.categories.is_empty() {
            return Err(CheckError::validation("message categories is required"));
        }
        Ok(())
    }
}

/// Run the check against an arbitrary queue source
pub fn run<S: QueueSource>(settings: &CheckSettings, source: &S) -> Result<CheckResult> {
    let output = source.fetch()?;
    let metrics = analyzer::analyze(&output, &settings.categories);
    let monitor = Monitor::new(settings.warning, settings.critical);
    Ok(CheckResult::from_metrics(&metrics, &monitor))
}

pub fn execute(matches: &ArgMatches) -> Result<CheckResult> {
    let settings = CheckSettings::from_matches(matches)?;
    let source = PostqueueCommand::new(&settings.postqueue_path);
    run(&settings, &source)
}
