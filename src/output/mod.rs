//! Publishing results to the host.
//!
//! A run publishes its three outputs through one [`OutputSink::publish`]
//! call after everything else succeeded, so a failed run never leaves
//! partial outputs behind.
//!
//! - [`GithubOutputFile`] - appends to the `$GITHUB_OUTPUT` file on a runner
//! - [`StdoutSink`] - prints `name=value` lines, or one JSON object
//! - [`MemorySink`] - keeps outputs in memory (tests, library callers)

mod github;

pub use github::{escape_command_data, format_output_entries, GithubOutputFile};

use std::collections::BTreeMap;

use crate::burndown::ActionOutputs;
use crate::error::Result;

/// Destination for run outputs.
pub trait OutputSink {
    /// Publish all outputs at once.
    fn publish(&mut self, outputs: &ActionOutputs) -> Result<()>;
}

/// Prints outputs to stdout.
#[derive(Debug, Default)]
pub struct StdoutSink {
    json: bool,
}

impl StdoutSink {
    #[must_use]
    pub const fn new(json: bool) -> Self {
        Self { json }
    }
}

impl OutputSink for StdoutSink {
    fn publish(&mut self, outputs: &ActionOutputs) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(outputs)?);
        } else {
            for (name, value) in outputs.entries() {
                println!("{name}={value}");
            }
        }
        Ok(())
    }
}

/// Collects outputs in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub outputs: BTreeMap<String, String>,
    pub publish_count: usize,
}

impl OutputSink for MemorySink {
    fn publish(&mut self, outputs: &ActionOutputs) -> Result<()> {
        for (name, value) in outputs.entries() {
            self.outputs.insert(name.to_string(), value.to_string());
        }
        self.publish_count += 1;
        Ok(())
    }
}

/// Whether the process runs as a GitHub Actions step.
#[must_use]
pub fn running_in_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Report a failed run to the workflow.
///
/// Emits an `::error::` workflow command on stdout when running under
/// Actions; a no-op elsewhere. Exit status is set by the caller.
pub fn signal_failure(message: &str) {
    if running_in_actions() {
        println!("::error::{}", escape_command_data(message));
    }
}
