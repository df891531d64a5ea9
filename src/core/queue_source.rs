//! External queue-listing command.
//!
//! The analyzer core only needs text; this module is the single seam to the
//! outside world so the rest of the check can be tested without a mail queue.

use log::debug;
use std::path::PathBuf;
use std::process::Command;

use crate::error::{CheckError, Result};

/// Source of raw queue-listing text
pub trait QueueSource {
    fn fetch(&self) -> Result<String>;
}

/// Runs the postqueue binary and captures its output
#[derive(Debug, Clone)]
pub struct PostqueueCommand {
    path: PathBuf,
    args: Vec<String>,
}

impl PostqueueCommand {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            args: vec!["-p".to_string()],
        }
    }
}

impl QueueSource for PostqueueCommand {
    fn fetch(&self) -> Result<String> {
        debug!("command: {} {}", self.path.display(), self.args.join(" "));

        let output = Command::new(&self.path)
            .args(&self.args)
            .output()
            .map_err(|err| CheckError::CommandExecution {
                exit_code: None,
                stdout: String::new(),
                stderr: err.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(CheckError::CommandExecution {
                exit_code: output.status.code(),
                stdout,
                stderr,
            });
        }

        debug!("fetch (output): '{}'", stdout);
        Ok(stdout)
    }
}
