//! Points aggregation.
//!
//! Folds the items of the current iteration into per-group tallies. The
//! ungrouped bucket is a variant of [`GroupKey`], so it can never collide
//! with a real label, and the tallies live in a `BTreeMap` so the order the
//! items arrived in is never visible downstream.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use super::window::is_current;
use crate::model::{Points, ProjectItem, TrackedItem};

/// Key of one accumulator bucket.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    /// No grouping configured, or the item has no grouping value
    Ungrouped,
    Named(String),
}

impl GroupKey {
    /// Bucket for an item.
    #[must_use]
    pub fn for_item(item: &TrackedItem, has_grouping: bool) -> Self {
        match (&item.group, has_grouping) {
            (Some(name), true) => Self::Named(name.clone()),
            _ => Self::Ungrouped,
        }
    }
}

/// Running remaining/total points for one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tally {
    pub remaining_points: Points,
    pub total_points: Points,
}

impl Tally {
    fn record(&mut self, points: Points, completed: bool) {
        self.total_points += points;
        if !completed {
            self.remaining_points += points;
        }
    }
}

/// Result of one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Burndown {
    /// Sum of `remaining_points` across every bucket, ungrouped included
    pub remaining_points: Points,

    /// Sum of `total_points` across every bucket, ungrouped included
    pub total_points: Points,

    pub groups: BTreeMap<GroupKey, Tally>,
}

/// Aggregate burndown points for the iteration containing `today`.
///
/// Redacted items, items outside the current iteration and unestimated items
/// contribute nothing. An item counts as remaining unless its status equals
/// `completed_status` exactly; a missing status is remaining.
pub fn aggregate<'a, I>(
    items: I,
    today: NaiveDate,
    completed_status: &str,
    has_grouping: bool,
) -> Burndown
where
    I: IntoIterator<Item = &'a ProjectItem>,
{
    let current: Vec<&TrackedItem> = items
        .into_iter()
        .filter_map(ProjectItem::tracked)
        .filter(|item| is_current(item.iteration.as_ref(), today))
        .collect();

    info!(count = current.len(), %today, "Found items in the current iteration");

    let mut groups: BTreeMap<GroupKey, Tally> = BTreeMap::new();
    for item in current {
        let Some(points) = item.points else {
            debug!(kind = item.kind.as_str(), "Skipping unestimated item");
            continue;
        };
        let completed = item.status.as_deref() == Some(completed_status);
        groups
            .entry(GroupKey::for_item(item, has_grouping))
            .or_default()
            .record(points, completed);
    }

    Burndown {
        remaining_points: groups.values().map(|t| t.remaining_points).sum(),
        total_points: groups.values().map(|t| t.total_points).sum(),
        groups,
    }
}
