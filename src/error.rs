use std::time::Duration;

use thiserror::Error;

/// Startup configuration errors. Fatal: the polling loop never starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVars(Vec<&'static str>),

    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

/// Failures while talking to the homework-status API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("homework API unreachable: {source} (endpoint {endpoint}, timeout {timeout:?})")]
    ServerUnreachable {
        endpoint: &'static str,
        timeout: Duration,
        #[source]
        source: reqwest::Error,
    },

    #[error("homework API answered HTTP {status} (endpoint {endpoint}, from_date {from_date})")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        endpoint: &'static str,
        from_date: i64,
    },

    #[error("homework API body is not valid JSON: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("homework API rejected the request: {reported}")]
    UpstreamRejected { reported: String },
}

/// The body decoded, but its contents break the documented contract.
///
/// These can mean a transient API fault or an upstream contract change;
/// either way the loop announces them and retries on the next cycle.
#[derive(Error, Debug)]
pub enum ContractError {
    #[error("response is missing the `{field}` field")]
    MissingField { field: &'static str },

    #[error("`{field}` has the wrong type, expected {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("unknown homework status {0:?}")]
    UnknownStatus(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error("failed to deliver Telegram message: {0}")]
    Delivery(#[from] teloxide::RequestError),
}

pub type Result<T> = std::result::Result<T, Error>;
