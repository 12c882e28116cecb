//! Run command implementation.
//!
//! Reads the step inputs, fetches every project item and publishes the
//! burndown outputs for the iteration containing today.

use std::time::Duration;

use chrono::{Local, NaiveDate};
use colored::Colorize;
use tracing::info;

use crate::burndown::{grouping_results, Burndown};
use crate::cli::{OutputTarget, RunArgs};
use crate::config::BurndownConfig;
use crate::error::{Error, Result};
use crate::github::{resolve_graphql_endpoint, GithubClient};
use crate::output::{GithubOutputFile, StdoutSink};
use crate::pipeline::run_pass;

/// Where outputs end up for this run.
#[derive(Debug)]
enum Destination {
    File(GithubOutputFile),
    Stdout,
}

/// Pick the destination for `target`, given the runner's output file.
fn destination(target: OutputTarget, output_file: Option<GithubOutputFile>) -> Result<Destination> {
    match (target, output_file) {
        (OutputTarget::Stdout, _) | (OutputTarget::Auto, None) => Ok(Destination::Stdout),
        (OutputTarget::Github | OutputTarget::Auto, Some(file)) => Ok(Destination::File(file)),
        (OutputTarget::Github, None) => Err(Error::Output(
            "GITHUB_OUTPUT is not set; use --output stdout outside a workflow".to_string(),
        )),
    }
}

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if an input is missing or invalid, the GitHub API
/// request fails, or the outputs cannot be written.
pub fn execute(args: &RunArgs, json: bool, quiet: bool) -> Result<()> {
    let config = BurndownConfig::from_inputs(args)?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let destination = destination(args.output, GithubOutputFile::from_env())?;

    let endpoint = resolve_graphql_endpoint(args.graphql_url.as_deref());
    let client = GithubClient::new(
        &config.github_token,
        endpoint,
        Duration::from_secs(args.timeout_secs),
    )?;
    info!(
        login = %config.login_name,
        project = config.project_number,
        endpoint = client.endpoint(),
        %today,
        "Computing burndown"
    );

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| Error::Other(format!("Failed to create async runtime: {e}")))?;

    match destination {
        Destination::Stdout => {
            let mut sink = StdoutSink::new(json);
            rt.block_on(run_pass(&client, &config, today, &mut sink))?;
        }
        Destination::File(file) => {
            let mut sink = file;
            let burndown = rt.block_on(run_pass(&client, &config, today, &mut sink))?;
            if json {
                print_json(&burndown, today);
            } else if !quiet {
                print_summary(&burndown, today, &sink);
            }
        }
    }
    Ok(())
}

fn print_json(burndown: &Burndown, today: NaiveDate) {
    let output = serde_json::json!({
        "date": today.to_string(),
        "remainingPoints": burndown.remaining_points,
        "totalPoints": burndown.total_points,
        "groups": grouping_results(burndown),
    });
    println!("{output}");
}

fn print_summary(burndown: &Burndown, today: NaiveDate, file: &GithubOutputFile) {
    println!(
        "{} {} {}",
        "Burndown".cyan().bold(),
        format!("as of {today}").dimmed(),
        format!("-> {}", file.path().display()).dimmed()
    );
    println!(
        "  {} {} / {}",
        "remaining".bold(),
        burndown.remaining_points.to_string().yellow(),
        burndown.total_points
    );
    for (group, tally) in grouping_results(burndown) {
        println!(
            "  {} {} / {}",
            group.bold(),
            tally.remaining_points.to_string().yellow(),
            tally.total_points
        );
    }
}
