//! Run configuration.
//!
//! Validates the step inputs into a [`BurndownConfig`]. Validation happens
//! before any network access, so a misconfigured step fails without a
//! single request and without publishing outputs.
//!
//! Checks, in order:
//! 1. `github-token`, `login-name`, `project-number` are present
//! 2. `project-number` is a positive integer
//! 3. the four field/value inputs are non-empty
//!
//! `grouping-field-name` is optional; empty means no grouping.

pub mod inputs;

pub use inputs::{input_env_var, InputSource};

use std::fmt;

use crate::error::{Error, Result};
use crate::fetch::ItemQuery;

/// Validated inputs of one burndown run.
#[derive(Clone, PartialEq, Eq)]
pub struct BurndownConfig {
    pub github_token: String,
    pub login_name: String,
    pub project_number: u32,
    pub point_field_name: String,
    pub iteration_field_name: String,
    pub status_field_name: String,

    /// Status label that marks an item done
    pub status_completed_value: String,

    pub grouping_field_name: Option<String>,
}

impl fmt::Debug for BurndownConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BurndownConfig")
            .field("github_token", &"***")
            .field("login_name", &self.login_name)
            .field("project_number", &self.project_number)
            .field("point_field_name", &self.point_field_name)
            .field("iteration_field_name", &self.iteration_field_name)
            .field("status_field_name", &self.status_field_name)
            .field("status_completed_value", &self.status_completed_value)
            .field("grouping_field_name", &self.grouping_field_name)
            .finish()
    }
}

fn required(source: &impl InputSource, name: &str) -> Result<String> {
    let value = source.get_trimmed(name);
    if value.is_empty() {
        return Err(Error::MissingInput {
            name: name.to_string(),
        });
    }
    Ok(value)
}

fn non_empty(source: &impl InputSource, name: &str) -> Result<String> {
    let value = source.get_trimmed(name);
    if value.is_empty() {
        return Err(Error::InvalidInput(format!("{name} must not be empty")));
    }
    Ok(value)
}

impl BurndownConfig {
    /// Read and validate inputs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingInput`] for an absent required input and
    /// [`Error::InvalidInput`] for a project number that is not a positive
    /// integer or an empty field name.
    pub fn from_inputs(source: &impl InputSource) -> Result<Self> {
        let github_token = required(source, inputs::GITHUB_TOKEN)?;
        let login_name = required(source, inputs::LOGIN_NAME)?;
        let project_number = required(source, inputs::PROJECT_NUMBER)?
            .parse::<u32>()
            .ok()
            .filter(|number| *number > 0)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "{} must be a positive integer",
                    inputs::PROJECT_NUMBER
                ))
            })?;

        let point_field_name = non_empty(source, inputs::POINT_FIELD_NAME)?;
        let iteration_field_name = non_empty(source, inputs::ITERATION_FIELD_NAME)?;
        let status_field_name = non_empty(source, inputs::STATUS_FIELD_NAME)?;
        let status_completed_value = non_empty(source, inputs::STATUS_COMPLETED_VALUE)?;

        let grouping_field_name = Some(source.get_trimmed(inputs::GROUPING_FIELD_NAME))
            .filter(|name| !name.is_empty());

        Ok(Self {
            github_token,
            login_name,
            project_number,
            point_field_name,
            iteration_field_name,
            status_field_name,
            status_completed_value,
            grouping_field_name,
        })
    }

    /// Whether a grouping dimension is configured.
    #[must_use]
    pub const fn has_grouping(&self) -> bool {
        self.grouping_field_name.is_some()
    }

    /// Parameters for the item fetcher.
    #[must_use]
    pub fn item_query(&self) -> ItemQuery {
        ItemQuery {
            login: self.login_name.clone(),
            project_number: self.project_number,
            point_field_name: self.point_field_name.clone(),
            iteration_field_name: self.iteration_field_name.clone(),
            status_field_name: self.status_field_name.clone(),
            grouping_field_name: self.grouping_field_name.clone(),
        }
    }
}
