use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use crate::domain::Target;
use crate::error::HttpError;

const USER_AGENT: &str = concat!("thor/", env!("CARGO_PKG_VERSION"));

/// Inputs for a single throw.
#[derive(Debug, Clone, Copy)]
pub struct ThrowRequest<'req> {
    pub target: &'req Target,
    pub hammer_id: usize,
    pub throw_index: usize,
    /// Keep the decoded response body (verbose runs only).
    pub keep_body: bool,
}

/// Result of a completed throw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Throw {
    pub elapsed: Duration,
    pub body: Option<String>,
}

/// Issues one request and measures its full round trip.
///
/// Failures are never retried and no timeout is applied; a hung request
/// blocks only the hammer awaiting it.
#[async_trait]
pub trait ThrowExecutor: Send + Sync {
    /// # Errors
    ///
    /// Returns `HttpError::ConnectionFailure` when the target cannot be
    /// reached, or `HttpError::ReadBody` when the response is cut short.
    async fn throw(&self, request: ThrowRequest<'_>) -> Result<Throw, HttpError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    client: Client,
}

impl ReqwestExecutor {
    /// Builds the shared client. No request or connect timeout is set.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::BuildClientFailed` when the TLS backend or client
    /// configuration cannot be initialized.
    pub fn new() -> Result<Self, HttpError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| HttpError::BuildClientFailed { source: err })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ThrowExecutor for ReqwestExecutor {
    async fn throw(&self, request: ThrowRequest<'_>) -> Result<Throw, HttpError> {
        let url = request.target.as_str();
        let started = Instant::now();

        let response = match self.client.get(request.target.url().clone()).send().await {
            Ok(response) => response,
            Err(err) => {
                error!(
                    hammer = request.hammer_id,
                    throw = request.throw_index,
                    "Request to {} failed: {}",
                    url,
                    err
                );
                return Err(HttpError::connection(url, err));
            }
        };
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|err| HttpError::ReadBody {
            url: url.to_owned(),
            source: err,
        })?;
        let elapsed = started.elapsed();

        debug!(
            hammer = request.hammer_id,
            throw = request.throw_index,
            status,
            bytes = bytes.len(),
            ?elapsed,
            "throw complete"
        );

        let body = request
            .keep_body
            .then(|| String::from_utf8_lossy(&bytes).into_owned());
        Ok(Throw { elapsed, body })
    }
}
