//! GitHub GraphQL client.

use std::time::Duration;

use tracing::debug;

use super::query::{GraphQlRequest, QueryVariables, GET_PROJECT_ITEMS_QUERY};
use super::wire::{GraphQlResponse, ProjectItemsData};
use crate::error::{Error, Result};
use crate::fetch::{ItemPage, ItemPageSource, ItemQuery};

/// Public GitHub GraphQL endpoint.
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Resolve the GraphQL endpoint.
///
/// Priority: explicit value > `GITHUB_GRAPHQL_URL` > public endpoint.
#[must_use]
pub fn resolve_graphql_endpoint(explicit: Option<&str>) -> String {
    if let Some(endpoint) = explicit.filter(|e| !e.trim().is_empty()) {
        return endpoint.to_string();
    }

    if let Ok(endpoint) = std::env::var("GITHUB_GRAPHQL_URL") {
        if !endpoint.trim().is_empty() {
            return endpoint;
        }
    }

    DEFAULT_GRAPHQL_URL.to_string()
}

/// Client for the project items query.
pub struct GithubClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl GithubClient {
    /// Create a client authenticating with `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(token: &str, endpoint: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("burndown/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            token: token.to_string(),
        })
    }

    /// GraphQL endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ItemPageSource for GithubClient {
    async fn fetch_page(&self, query: &ItemQuery, cursor: Option<&str>) -> Result<ItemPage> {
        let request = GraphQlRequest {
            query: GET_PROJECT_ITEMS_QUERY,
            variables: QueryVariables::new(query, cursor),
        };
        debug!(endpoint = %self.endpoint, variables = ?request.variables, "Posting GraphQL query");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GraphQlResponse<ProjectItemsData> = response.json().await?;
        if !payload.errors.is_empty() {
            return Err(Error::GraphQl {
                messages: payload.errors.into_iter().map(|e| e.message).collect(),
            });
        }

        Ok(payload.data.unwrap_or_default().into_page())
    }
}
