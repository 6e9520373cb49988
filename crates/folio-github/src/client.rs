//! GitHub REST HTTP client.

use std::time::Duration;

use reqwest::header::ACCEPT;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument, trace};

use folio_core::error::{ApiError, Error, TransportError};
use folio_core::ApiUrl;

/// Media type GitHub asks REST clients to send.
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Default per-request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body returned by the GitHub API.
#[derive(Debug, serde::Deserialize)]
struct GithubErrorResponse {
    message: Option<String>,
}

/// HTTP client for GitHub REST requests.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: reqwest::Client,
    api: ApiUrl,
    timeout: Duration,
}

impl GithubClient {
    /// Create a new client for the given API base URL.
    pub fn new(api: ApiUrl) -> Self {
        Self::with_timeout(api, DEFAULT_TIMEOUT)
    }

    /// Create a new client with an explicit per-request deadline.
    pub fn with_timeout(api: ApiUrl, timeout: Duration) -> Self {
        // GitHub rejects requests without a User-Agent.
        let client = reqwest::Client::builder()
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            api,
            timeout,
        }
    }

    /// Returns the API base URL this client is configured for.
    pub fn api_url(&self) -> &ApiUrl {
        &self.api
    }

    /// Make a GET request and deserialize the JSON response.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn get_json<Q, R>(&self, url: &str, params: &Q) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!(%url, "GitHub query");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(url)
            .query(params)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        self.handle_response(response).await
    }

    /// Handle a GitHub response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "GitHub response");

        if status.is_success() {
            let body = response
                .json::<R>()
                .await
                .map_err(|e| self.map_transport(e))?;
            Ok(body)
        } else {
            let error = self.parse_error_response(response).await;
            Err(Error::Api(error))
        }
    }

    /// Parse a GitHub error response.
    async fn parse_error_response(&self, response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        // Try to parse as the GitHub error format
        match response.json::<GithubErrorResponse>().await {
            Ok(error_body) => ApiError::new(status, error_body.message),
            Err(_) => ApiError::new(status, None),
        }
    }

    fn map_transport(&self, err: reqwest::Error) -> Error {
        let transport = if err.is_timeout() {
            TransportError::Timeout {
                duration_ms: self.timeout.as_millis() as u64,
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        };
        Error::Transport(transport)
    }
}
