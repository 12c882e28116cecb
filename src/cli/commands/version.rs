//! Version command implementation.

use crate::error::Result;
use crate::github::DEFAULT_GRAPHQL_URL;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VersionOutput<'a> {
    version: &'a str,
    build: &'a str,
    graphql_endpoint: &'a str,
}

/// Execute the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(json: bool) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let build = if cfg!(debug_assertions) {
        "dev"
    } else {
        "release"
    };

    if json {
        let output = VersionOutput {
            version,
            build,
            graphql_endpoint: DEFAULT_GRAPHQL_URL,
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("burndown {version} ({build})");
    Ok(())
}
