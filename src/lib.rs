//! Iteration burndown for GitHub Projects.
//!
//! Computes the remaining and total story points of the iteration that
//! contains today, optionally broken down by a single-select field, and
//! publishes them as step outputs (`remaining-points`, `total-points`,
//! `grouping-results`).
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Step inputs and their validation
//! - [`github`] - GraphQL client for project items
//! - [`fetch`] - Cursor pagination over an [`fetch::ItemPageSource`]
//! - [`model`] - Project item types and points
//! - [`burndown`] - Iteration window, aggregation and rendered outputs
//! - [`pipeline`] - One fetch/aggregate/publish pass
//! - [`output`] - Output sinks (`$GITHUB_OUTPUT`, stdout)
//! - [`calendar`] - Business-day counting with holiday calendars
//! - [`error`] - Error types and handling

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod burndown;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod github;
pub mod model;
pub mod output;
pub mod pipeline;

pub use error::{Error, Result};
