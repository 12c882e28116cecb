//! `$GITHUB_OUTPUT` file sink.
//!
//! Each output is appended as a heredoc block:
//!
//! ```text
//! name<<ghadelimiter_<uuid>
//! value
//! ghadelimiter_<uuid>
//! ```
//!
//! All blocks of a run are written with a single `write_all`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::OutputSink;
use crate::burndown::ActionOutputs;
use crate::error::{Error, Result};

/// Appends outputs to the file named by `$GITHUB_OUTPUT`.
#[derive(Debug, Clone)]
pub struct GithubOutputFile {
    path: PathBuf,
}

impl GithubOutputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sink for the runner's `$GITHUB_OUTPUT`, if set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        std::env::var_os("GITHUB_OUTPUT")
            .filter(|p| !p.is_empty())
            .map(Self::new)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Render heredoc blocks for `entries` using `delimiter`.
///
/// # Errors
///
/// Fails if a name or value contains the delimiter, which would end the
/// block early.
pub fn format_output_entries(entries: &[(&str, &str)], delimiter: &str) -> Result<String> {
    let mut content = String::new();
    for (name, value) in entries {
        if name.contains(delimiter) || value.contains(delimiter) {
            return Err(Error::Output(format!(
                "output {name} contains the delimiter {delimiter}"
            )));
        }
        content.push_str(&format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"));
    }
    Ok(content)
}

impl OutputSink for GithubOutputFile {
    fn publish(&mut self, outputs: &ActionOutputs) -> Result<()> {
        let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
        let content = format_output_entries(&outputs.entries(), &delimiter)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                Error::Output(format!("Failed to open {}: {e}", self.path.display()))
            })?;
        file.write_all(content.as_bytes())?;

        debug!(path = %self.path.display(), "Wrote step outputs");
        Ok(())
    }
}

/// Escape a message for a workflow command (`::error::<data>`).
#[must_use]
pub fn escape_command_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
