//! Result presentation.
//!
//! Turns a [`Burndown`] into the three string outputs a workflow step
//! exposes. The ungrouped bucket is never named in `grouping-results`,
//! although its points are already part of the overall totals.

use std::collections::BTreeMap;

use serde::Serialize;

use super::aggregate::{Burndown, GroupKey, Tally};
use crate::error::Result;

/// Output name for the remaining points.
pub const REMAINING_POINTS: &str = "remaining-points";
/// Output name for the total points.
pub const TOTAL_POINTS: &str = "total-points";
/// Output name for the JSON grouping map.
pub const GROUPING_RESULTS: &str = "grouping-results";

/// Named groups and their tallies, keys sorted.
pub type GroupingResults = BTreeMap<String, Tally>;

/// Named groups only; the ungrouped bucket is dropped.
#[must_use]
pub fn grouping_results(burndown: &Burndown) -> GroupingResults {
    burndown
        .groups
        .iter()
        .filter_map(|(key, tally)| match key {
            GroupKey::Named(name) => Some((name.clone(), *tally)),
            GroupKey::Ungrouped => None,
        })
        .collect()
}

/// Rendered outputs of one run, published together or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutputs {
    #[serde(rename = "remaining-points")]
    pub remaining_points: String,

    #[serde(rename = "total-points")]
    pub total_points: String,

    /// Compact JSON object of group label to `{remainingPoints, totalPoints}`
    #[serde(rename = "grouping-results")]
    pub grouping_results: String,
}

impl ActionOutputs {
    /// Render the outputs of a burndown.
    ///
    /// # Errors
    ///
    /// Returns an error if the grouping map cannot be serialized.
    pub fn from_burndown(burndown: &Burndown) -> Result<Self> {
        Ok(Self {
            remaining_points: burndown.remaining_points.to_string(),
            total_points: burndown.total_points.to_string(),
            grouping_results: serde_json::to_string(&grouping_results(burndown))?,
        })
    }

    /// Name/value pairs in publishing order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            (REMAINING_POINTS, &self.remaining_points),
            (TOTAL_POINTS, &self.total_points),
            (GROUPING_RESULTS, &self.grouping_results),
        ]
    }
}
