//! Project item model.
//!
//! A project item is one row on a GitHub Projects board: an issue, a pull
//! request, a draft issue, or a redacted placeholder for an item the token
//! cannot see. Only the fields the burndown needs are kept, already resolved
//! from the board's custom fields.

use chrono::NaiveDate;

use super::points::Points;

/// Kind of a visible project item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    DraftIssue,
    Issue,
    PullRequest,
}

impl ItemKind {
    /// Get the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DraftIssue => "DRAFT_ISSUE",
            Self::Issue => "ISSUE",
            Self::PullRequest => "PULL_REQUEST",
        }
    }
}

/// The iteration (sprint) an item is assigned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iteration {
    /// Opaque GitHub iteration identifier
    pub iteration_id: String,

    /// First day of the iteration
    pub start_date: NaiveDate,

    /// Length in days
    pub duration: u32,
}

impl Iteration {
    pub fn new(iteration_id: impl Into<String>, start_date: NaiveDate, duration: u32) -> Self {
        Self {
            iteration_id: iteration_id.into(),
            start_date,
            duration,
        }
    }
}

/// A visible item with its resolved field values.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedItem {
    pub kind: ItemKind,

    /// Point estimate; `None` means not estimated
    pub points: Option<Points>,

    /// Assigned iteration; `None` means unassigned
    pub iteration: Option<Iteration>,

    /// Status label; `None` is treated as not completed
    pub status: Option<String>,

    /// Grouping label; `None` means ungrouped
    pub group: Option<String>,
}

impl TrackedItem {
    /// Create an item with no field values set.
    #[must_use]
    pub const fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            points: None,
            iteration: None,
            status: None,
            group: None,
        }
    }

    /// Set the point estimate.
    #[must_use]
    pub fn with_points(mut self, points: impl Into<Points>) -> Self {
        self.points = Some(points.into());
        self
    }

    /// Assign to an iteration.
    #[must_use]
    pub fn with_iteration(mut self, iteration: Iteration) -> Self {
        self.iteration = Some(iteration);
        self
    }

    /// Set the status label.
    #[must_use]
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    /// Set the grouping label.
    #[must_use]
    pub fn with_group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }
}

/// One item on the board.
///
/// `Redacted` carries nothing: the caller lacks permission to see the item,
/// so it never contributes to any sum.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectItem {
    Redacted,
    Tracked(TrackedItem),
}

impl ProjectItem {
    /// The visible item, or `None` for a redacted placeholder.
    #[must_use]
    pub const fn tracked(&self) -> Option<&TrackedItem> {
        match self {
            Self::Redacted => None,
            Self::Tracked(item) => Some(item),
        }
    }
}

impl From<TrackedItem> for ProjectItem {
    fn from(item: TrackedItem) -> Self {
        Self::Tracked(item)
    }
}
