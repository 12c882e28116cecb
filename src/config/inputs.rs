//! Step inputs.
//!
//! Inputs are read through [`InputSource`], a read-only key/value view
//! queried once at startup. Names follow the GitHub Actions convention
//! (`project-number`, read from `INPUT_PROJECT-NUMBER` on a runner).

use std::collections::{BTreeMap, HashMap};

pub const GITHUB_TOKEN: &str = "github-token";
pub const LOGIN_NAME: &str = "login-name";
pub const PROJECT_NUMBER: &str = "project-number";
pub const POINT_FIELD_NAME: &str = "point-field-name";
pub const ITERATION_FIELD_NAME: &str = "iteration-field-name";
pub const STATUS_FIELD_NAME: &str = "status-field-name";
pub const STATUS_COMPLETED_VALUE: &str = "status-completed-value";
pub const GROUPING_FIELD_NAME: &str = "grouping-field-name";

/// Read-only source of named inputs.
pub trait InputSource {
    /// Raw value of the input, or `None` if it was not supplied.
    fn get(&self, name: &str) -> Option<String>;

    /// Value with surrounding whitespace removed; missing reads as empty.
    fn get_trimmed(&self, name: &str) -> String {
        self.get(name)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }
}

impl InputSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl InputSource for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        BTreeMap::get(self, name).cloned()
    }
}

/// Environment variable a runner uses to pass an input.
#[must_use]
pub fn input_env_var(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}
