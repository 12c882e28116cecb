//! CLI definitions using clap.

use std::fmt;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{inputs, InputSource};

pub mod commands;

/// Burndown points for the current iteration of a GitHub project
#[derive(Parser, Debug)]
#[command(name = "burndown", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute remaining and total points for the current iteration
    Run(RunArgs),

    /// Count business days between two dates (inclusive)
    BusinessDays(BusinessDaysArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print version information
    Version,
}

/// Where `run` publishes its outputs.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputTarget {
    /// `$GITHUB_OUTPUT` when set, stdout otherwise (default)
    #[default]
    Auto,
    /// Append to the `$GITHUB_OUTPUT` file
    Github,
    /// Print to stdout
    Stdout,
}

/// Inputs of the `run` command.
///
/// Every input falls back to the `INPUT_<NAME>` variable a workflow runner
/// sets for the step's `with:` block.
#[derive(Args, Default)]
pub struct RunArgs {
    /// Token used to query the GitHub API
    #[arg(long, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Organization login that owns the project
    #[arg(long, env = "INPUT_LOGIN-NAME")]
    pub login_name: Option<String>,

    /// Project number (from the project URL)
    #[arg(long, env = "INPUT_PROJECT-NUMBER")]
    pub project_number: Option<String>,

    /// Name of the number field holding point estimates
    #[arg(long, env = "INPUT_POINT-FIELD-NAME")]
    pub point_field_name: Option<String>,

    /// Name of the iteration field
    #[arg(long, env = "INPUT_ITERATION-FIELD-NAME")]
    pub iteration_field_name: Option<String>,

    /// Name of the single-select status field
    #[arg(long, env = "INPUT_STATUS-FIELD-NAME")]
    pub status_field_name: Option<String>,

    /// Status value that marks an item as done
    #[arg(long, env = "INPUT_STATUS-COMPLETED-VALUE")]
    pub status_completed_value: Option<String>,

    /// Optional single-select field to group points by (e.g. Epic)
    #[arg(long, env = "INPUT_GROUPING-FIELD-NAME")]
    pub grouping_field_name: Option<String>,

    /// Evaluate the iteration as of this date (default: local today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Where to publish outputs
    #[arg(long, value_enum, default_value_t)]
    pub output: OutputTarget,

    /// GraphQL endpoint (default: $GITHUB_GRAPHQL_URL or api.github.com)
    #[arg(long)]
    pub graphql_url: Option<String>,

    /// Timeout for each API request, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

impl fmt::Debug for RunArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunArgs")
            .field("github_token", &self.github_token.as_ref().map(|_| "***"))
            .field("login_name", &self.login_name)
            .field("project_number", &self.project_number)
            .field("point_field_name", &self.point_field_name)
            .field("iteration_field_name", &self.iteration_field_name)
            .field("status_field_name", &self.status_field_name)
            .field("status_completed_value", &self.status_completed_value)
            .field("grouping_field_name", &self.grouping_field_name)
            .field("today", &self.today)
            .field("output", &self.output)
            .field("graphql_url", &self.graphql_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl InputSource for RunArgs {
    fn get(&self, name: &str) -> Option<String> {
        let value = match name {
            inputs::GITHUB_TOKEN => &self.github_token,
            inputs::LOGIN_NAME => &self.login_name,
            inputs::PROJECT_NUMBER => &self.project_number,
            inputs::POINT_FIELD_NAME => &self.point_field_name,
            inputs::ITERATION_FIELD_NAME => &self.iteration_field_name,
            inputs::STATUS_FIELD_NAME => &self.status_field_name,
            inputs::STATUS_COMPLETED_VALUE => &self.status_completed_value,
            inputs::GROUPING_FIELD_NAME => &self.grouping_field_name,
            _ => return None,
        };
        value.clone()
    }
}

/// Holiday calendar for business-day counting.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CalendarChoice {
    /// Japanese national holidays (default)
    #[default]
    Jp,
    /// Weekends only
    None,
}

#[derive(Args, Debug)]
pub struct BusinessDaysArgs {
    /// First day of the range
    #[arg(value_name = "START")]
    pub start: NaiveDate,

    /// Last day of the range
    #[arg(value_name = "END")]
    pub end: NaiveDate,

    /// Holiday calendar
    #[arg(long, value_enum, default_value_t)]
    pub calendar: CalendarChoice,

    /// Extra holiday (repeatable)
    #[arg(long = "holiday", value_name = "YYYY-MM-DD")]
    pub holidays: Vec<NaiveDate>,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_args_as_input_source() {
        let cli = Cli::parse_from([
            "burndown",
            "run",
            "--github-token",
            "dummy",
            "--project-number",
            "7",
            "--today",
            "2024-12-10",
        ]);
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };

        assert_eq!(args.get(inputs::GITHUB_TOKEN).as_deref(), Some("dummy"));
        assert_eq!(args.get(inputs::PROJECT_NUMBER).as_deref(), Some("7"));
        assert_eq!(args.get("unknown-input"), None);
        assert_eq!(args.today, NaiveDate::from_ymd_opt(2024, 12, 10));
        assert_eq!(args.output, OutputTarget::Auto);
    }

    #[test]
    fn test_run_args_debug_redacts_token() {
        let cli = Cli::parse_from([
            "burndown",
            "run",
            "--github-token",
            "ghp_secret",
            "--login-name",
            "octocat",
        ]);
        let debug = format!("{cli:?}");
        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("***"));
        assert!(debug.contains("octocat"));
    }

    #[test]
    fn test_business_days_args() {
        let cli = Cli::parse_from([
            "burndown",
            "business-days",
            "2024-04-29",
            "2024-05-06",
            "--holiday",
            "2024-04-30",
            "--calendar",
            "none",
        ]);
        let Commands::BusinessDays(args) = cli.command else {
            panic!("expected business-days");
        };
        assert_eq!(args.calendar, CalendarChoice::None);
        assert_eq!(args.holidays.len(), 1);
    }
}
