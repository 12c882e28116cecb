//! Command implementations.

pub mod business_days;
pub mod completions;
pub mod run;
pub mod version;
