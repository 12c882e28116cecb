//! GitHub Projects (v2) item source.
//!
//! Implements [`ItemPageSource`](crate::fetch::ItemPageSource) over the
//! GitHub GraphQL API.
//!
//! - [`query`] - GraphQL document and variables
//! - [`wire`] - Response types and conversion into [`ProjectItem`](crate::model::ProjectItem)s
//! - [`client`] - `reqwest` client
//!
//! # Configuration
//!
//! - `GITHUB_GRAPHQL_URL` - GraphQL endpoint (default: `https://api.github.com/graphql`).
//!   Set automatically on GitHub Actions runners, including GHES.

pub mod client;
pub mod query;
pub mod wire;

pub use client::{resolve_graphql_endpoint, GithubClient, DEFAULT_GRAPHQL_URL};
pub use query::{QueryVariables, GET_PROJECT_ITEMS_QUERY, PAGE_SIZE};
