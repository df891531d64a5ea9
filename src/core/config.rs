//! Plugin configuration file (TOML).
//!
//! The file is optional: absent, the built-in command path and category set
//! apply. Keys present in the file override the corresponding defaults.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{CheckError, Result};

/// Well-known location of the postqueue binary
pub const DEFAULT_POSTQUEUE_PATH: &str = "/usr/sbin/postqueue";

/// Configuration file contents
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(rename = "PostqueuePath", default)]
    pub postqueue_path: Option<String>,
    #[serde(rename = "ExcludeMsgCategories", default)]
    pub exclude_msg_categories: Option<BTreeMap<String, String>>,
}

impl ConfigFile {
    /// Load and parse the plugin configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|err| {
            CheckError::config(format!(
                "an error occurred while loading the file: {}",
                err
            ))
        })?;

        let config: ConfigFile = toml::from_str(&contents)?;
        debug!("loaded config: '{:?}'", config);
        Ok(config)
    }
}

/// Built-in benign-failure categories, label -> pattern
pub fn default_msg_categories() -> BTreeMap<String, String> {
    [
        //("Connection refused", "Connection refused"),
        //("Connection timeout", "Connection timed out"),
        ("Helo command rejected", "Helo command rejected: Host not found"),
        ("Host not found", "type=MX: Host not found, try again"),
        ("Mailbox full", "Mailbox full"),
        //("Network is unreachable", "Network is unreachable"),
        ("No route to host", "No route to host"),
        (
            "Over quota",
            "The email account that you tried to reach is over quota",
        ),
        //("Relay access denied", "Relay access denied"),
        // Add more log categories with corresponding regular expressions
    ]
    .iter()
    .map(|(label, pattern)| (label.to_string(), pattern.to_string()))
    .collect()
}

/// Render the default configuration as a commented TOML template.
///
/// Loading the template back must reproduce the built-in command path and
/// category set.
pub fn generate_template() -> Vec<String> {
    let categories = default_msg_categories();

    let mut lines = vec![
        "# check-postqueue config file".to_string(),
        "# Path to postqueue command".to_string(),
        format!("PostqueuePath = \"{}\"", DEFAULT_POSTQUEUE_PATH),
        String::new(),
        "# Exclude message categories".to_string(),
        "# Format: <category> = \"<regex>\"".to_string(),
        "[ExcludeMsgCategories]".to_string(),
    ];
    // BTreeMap iteration is already sorted by label
    for (label, pattern) in &categories {
        lines.push(format!("  \"{}\" = \"{}\"", label, pattern));
    }
    lines
}
