//! Error types for the burndown CLI.
//!
//! Provides structured error handling with:
//! - Machine-readable error codes (`ErrorCode`)
//! - Category-based exit codes (4=input, 6=upstream, 8=output, 1=internal)
//! - Retryability flags
//! - Context-aware recovery hints
//! - Structured JSON output for `--json` consumers

use thiserror::Error;

/// Result type alias for burndown operations.
pub type Result<T> = std::result::Result<T, Error>;

// ── Error Code ────────────────────────────────────────────────

/// Machine-readable error codes grouped by category.
///
/// Each code maps to a SCREAMING_SNAKE string and a category-based
/// exit code. Workflows match on the string; shell scripts on the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Input (exit 4)
    MissingInput,
    InvalidInput,

    // Upstream (exit 6)
    HttpError,
    UnexpectedStatus,
    GraphQlError,
    PaginationError,

    // Output (exit 8)
    OutputError,
    IoError,
    JsonError,

    // Internal (exit 1)
    InternalError,
}

impl ErrorCode {
    /// Machine-readable SCREAMING_SNAKE code string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::MissingInput => "MISSING_INPUT",
            Self::InvalidInput => "INVALID_INPUT",
            Self::HttpError => "HTTP_ERROR",
            Self::UnexpectedStatus => "UNEXPECTED_STATUS",
            Self::GraphQlError => "GRAPHQL_ERROR",
            Self::PaginationError => "PAGINATION_ERROR",
            Self::OutputError => "OUTPUT_ERROR",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Category-based exit code.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InternalError => 1,
            Self::MissingInput | Self::InvalidInput => 4,
            Self::HttpError
            | Self::UnexpectedStatus
            | Self::GraphQlError
            | Self::PaginationError => 6,
            Self::OutputError | Self::IoError | Self::JsonError => 8,
        }
    }

    /// Whether rerunning the step can succeed without changing anything
    /// but the inputs or waiting.
    ///
    /// True for input errors and transport failures. False for upstream
    /// rejections, output and internal errors. [`Error::is_retryable`]
    /// refines this per status code and GraphQL message.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::MissingInput | Self::InvalidInput | Self::HttpError
        )
    }
}

// ── Error Enum ────────────────────────────────────────────────

/// Errors that can occur during a burndown run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input required and not supplied: {name}")]
    MissingInput { name: String },

    #[error("{0}")]
    InvalidInput(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API returned {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("GraphQL error: {}", messages.join("; "))]
    GraphQl { messages: Vec<String> },

    #[error("Pagination error: {0}")]
    Pagination(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Map this error to its structured `ErrorCode`.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingInput { .. } => ErrorCode::MissingInput,
            Self::InvalidInput(_) => ErrorCode::InvalidInput,
            Self::Http(_) => ErrorCode::HttpError,
            Self::UnexpectedStatus { .. } => ErrorCode::UnexpectedStatus,
            Self::GraphQl { .. } => ErrorCode::GraphQlError,
            Self::Pagination(_) => ErrorCode::PaginationError,
            Self::Output(_) => ErrorCode::OutputError,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::JsonError,
            Self::Other(_) => ErrorCode::InternalError,
        }
    }

    /// Category-based exit code, delegating to the `ErrorCode`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.error_code().exit_code()
    }

    /// Whether rerunning the step can succeed.
    ///
    /// A 401 or 404 will fail again; a timeout, 429, 5xx or a rate-limit
    /// error (HTTP 403 or a GraphQL `RATE_LIMITED` error on a 200) can
    /// clear up by waiting.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::UnexpectedStatus { status, body } => match status {
                408 | 429 | 500..=599 => true,
                403 => mentions_rate_limit(body),
                _ => false,
            },
            Self::GraphQl { messages } => messages.iter().any(|m| mentions_rate_limit(m)),
            _ => self.error_code().is_retryable(),
        }
    }

    /// Context-aware recovery hint.
    ///
    /// Returns `None` if no actionable suggestion exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::MissingInput { name } => Some(format!(
                "Pass --{name} or set {} in the environment",
                crate::config::input_env_var(name)
            )),

            Self::UnexpectedStatus { status: 401, .. } => Some(
                "The github-token was rejected. Check that it is set and not expired.".to_string(),
            ),
            Self::UnexpectedStatus { status: 403 | 429, .. } => Some(
                "Access denied or rate limited. The token needs the `read:project` scope; \
                 if it has it, wait for the rate limit window to reset."
                    .to_string(),
            ),

            Self::GraphQl { messages } => {
                if messages.iter().any(|m| mentions_rate_limit(m)) {
                    Some("GitHub rate limit exceeded; rerun after the limit resets.".to_string())
                } else if messages.iter().any(|m| m.contains("Could not resolve")) {
                    Some(
                        "Check login-name and project-number: the organization or project \
                         was not found or is not visible to this token."
                            .to_string(),
                    )
                } else {
                    None
                }
            }

            Self::InvalidInput(_)
            | Self::Http(_)
            | Self::UnexpectedStatus { .. }
            | Self::Pagination(_)
            | Self::Output(_)
            | Self::Io(_)
            | Self::Json(_)
            | Self::Other(_) => None,
        }
    }

    /// Structured JSON representation for machine consumption.
    ///
    /// Includes error code, message, retryability, exit code, and
    /// optional recovery hint.
    #[must_use]
    pub fn to_structured_json(&self) -> serde_json::Value {
        let code = self.error_code();
        let mut obj = serde_json::json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
                "retryable": self.is_retryable(),
                "exit_code": code.exit_code(),
            }
        });

        if let Some(hint) = self.hint() {
            obj["error"]["hint"] = serde_json::Value::String(hint);
        }

        obj
    }
}

fn mentions_rate_limit(message: &str) -> bool {
    let message = message.to_ascii_lowercase();
    message.contains("rate limit") || message.contains("rate_limited")
}
