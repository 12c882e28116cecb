//! Burndown computation.
//!
//! Three pure stages run over a fully fetched item list:
//!
//! ```text
//! Vec<ProjectItem>
//!       │
//!       ▼
//! ┌─────────────┐   per item   ┌──────────────┐
//! │  aggregate  │─────────────▶│    window    │  is the iteration current?
//! └──────┬──────┘              └──────────────┘
//!        │ Burndown (GroupKey → Tally)
//!        ▼
//! ┌─────────────┐
//! │   present   │  drop ungrouped, render output strings
//! └─────────────┘
//! ```
//!
//! Nothing here performs I/O or reads the clock; "today" is always passed in.

pub mod aggregate;
pub mod present;
pub mod window;

pub use aggregate::{aggregate, Burndown, GroupKey, Tally};
pub use present::{grouping_results, ActionOutputs, GroupingResults};
pub use window::{is_current, IterationWindow};
