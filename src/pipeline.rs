//! One burndown pass: fetch, aggregate, present, publish.
//!
//! "Today" is captured once by the caller and held for the whole pass, so
//! every item is judged against the same date no matter how long paging
//! takes.

use chrono::NaiveDate;
use tracing::info;

use crate::burndown::{aggregate, ActionOutputs, Burndown};
use crate::config::BurndownConfig;
use crate::error::Result;
use crate::fetch::{fetch_all_items, ItemPageSource};
use crate::output::OutputSink;

/// Fetch every item and aggregate the burndown for `today`.
///
/// # Errors
///
/// Propagates any page retrieval error; nothing is aggregated in that case.
pub async fn compute_burndown<S: ItemPageSource>(
    source: &S,
    config: &BurndownConfig,
    today: NaiveDate,
) -> Result<Burndown> {
    let items = fetch_all_items(source, &config.item_query()).await?;
    Ok(aggregate(
        &items,
        today,
        &config.status_completed_value,
        config.has_grouping(),
    ))
}

/// Run a full pass and publish the outputs.
///
/// Outputs reach the sink only after fetching, aggregation and rendering
/// all succeeded.
///
/// # Errors
///
/// Returns the first error from fetching, rendering or publishing.
pub async fn run_pass<S: ItemPageSource>(
    source: &S,
    config: &BurndownConfig,
    today: NaiveDate,
    sink: &mut dyn OutputSink,
) -> Result<Burndown> {
    let burndown = compute_burndown(source, config, today).await?;
    let outputs = ActionOutputs::from_burndown(&burndown)?;
    sink.publish(&outputs)?;

    info!(
        remaining = %burndown.remaining_points,
        total = %burndown.total_points,
        groups = %outputs.grouping_results,
        "Published burndown"
    );
    Ok(burndown)
}
