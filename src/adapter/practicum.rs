//! HTTP client for the Practicum homework-status API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::domain::StatusFeed;
use crate::error::{ApiError, Result};
use crate::port::HomeworkApi;

/// Endpoint serving homework review statuses.
pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Per-request timeout. Retrying a failed request is the polling loop's job.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Practicum API client.
///
/// Performs a single timed GET per call; no retries happen at this layer.
pub struct PracticumClient {
    client: Client,
    token: String,
}

impl PracticumClient {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            token: token.into(),
        }
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<StatusFeed> {
        debug!(from_date, endpoint = ENDPOINT, "polling homework statuses");

        let response = self
            .client
            .get(ENDPOINT)
            .header(header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|source| ApiError::ServerUnreachable {
                endpoint: ENDPOINT,
                timeout: REQUEST_TIMEOUT,
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::UnexpectedStatus {
                status,
                endpoint: ENDPOINT,
                from_date,
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|source| ApiError::ServerUnreachable {
                endpoint: ENDPOINT,
                timeout: REQUEST_TIMEOUT,
                source,
            })?;

        Ok(parse_body(&body)?)
    }
}

/// Decode and screen the response body.
///
/// A body carrying a server-reported `code` or `error` field means the
/// request was rejected upstream even though the transport succeeded.
/// Split out of `fetch` so it tests without a server.
fn parse_body(body: &str) -> std::result::Result<StatusFeed, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(ApiError::MalformedResponse)?;

    for key in ["code", "error"] {
        if let Some(reported) = value.get(key) {
            return Err(ApiError::UpstreamRejected {
                reported: reported.to_string(),
            });
        }
    }

    Ok(StatusFeed::new(value))
}
