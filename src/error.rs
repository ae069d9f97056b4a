//! Error types for talking to Harvest and filling weeks.

use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Problems with the startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),

    /// A credential cannot be used as an HTTP header value.
    #[error("invalid header value for {name}: {source}")]
    InvalidHeader {
        name: &'static str,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Fatal errors. Any of these aborts the remaining fill sequence.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Harvest answered with something other than the expected status.
    #[error("{method} {url} returned status {status}: {body}")]
    Request {
        method: Method,
        url: String,
        status: StatusCode,
        body: serde_json::Value,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body did not match the expected shape.
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("week {week} does not exist in ISO year {year}")]
    InvalidWeek { year: i32, week: u32 },
}

impl HarvestError {
    /// HTTP status of a rejected request, if that is what this error is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            HarvestError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T, E = HarvestError> = std::result::Result<T, E>;

/// A project or task name that matched no active assignment.
///
/// This is recoverable: the caller reports the alternatives and stops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionNotFound {
    #[error("couldn't find project {name:?}, available projects: {available:?}")]
    Project { name: String, available: Vec<String> },

    #[error("couldn't find task {name:?} in project {project:?}, available tasks: {available:?}")]
    Task {
        project: String,
        name: String,
        available: Vec<String>,
    },
}
