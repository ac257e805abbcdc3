//! `MovieApiConnector` - movie database API connector.

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use super::api::LocalMovieApi;
use super::error::{ConfigError, DiscoverError};
use super::types::{DiscoverResult, MovieApiConfig, MovieList, TmdbErrorResponse};

/// Discovery endpoint, resolved against the base URL.
///
/// Absolute path: it replaces any path segment of the configured base URL.
pub const DISCOVER_ENDPOINT: &str = "/3/discover/movie";

/// Default User-Agent sent with every request.
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Movie database API connector.
///
/// Holds no per-request state; a single instance can serve any number of
/// sequential or concurrent discovery calls.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct MovieApiConnector {
    /// HTTP client.
    http_client: Client,
    /// Base URL as configured; parsed per request so a malformed value
    /// surfaces as a discovery failure rather than a construction failure.
    base_url: String,
    /// v3 API key.
    api_key: String,
}

/// Builder for `MovieApiConnector`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct MovieApiConnectorBuilder {
    api_base_url: Option<String>,
    api_key: Option<String>,
    user_agent: Option<String>,
}

impl MovieApiConnectorBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            api_base_url: None,
            api_key: None,
            user_agent: None,
        }
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Overrides the User-Agent (default: `filmbuff-api/<version>`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the connector.
    ///
    /// Only presence is checked here, before any request can be made. A
    /// malformed base URL is reported by each `discover_movies` call.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingBaseUrl` if the base URL is empty or unset.
    /// - `ConfigError::MissingApiKey` if the API key is empty or unset.
    /// - `ConfigError::HttpClient` if `reqwest::Client` build fails.
    pub fn build(self) -> Result<MovieApiConnector, ConfigError> {
        let Some(api_base_url) = non_blank(self.api_base_url) else {
            tracing::error!(
                "Movie API base URL is not set. Please configure the base URL in the module settings."
            );
            return Err(ConfigError::MissingBaseUrl);
        };

        let Some(api_key) = non_blank(self.api_key) else {
            tracing::error!(
                "Movie API key is not set. Please configure the API key in the module settings."
            );
            return Err(ConfigError::MissingApiKey);
        };

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(MovieApiConnector {
            http_client,
            base_url: String::from(api_base_url.trim()),
            api_key: String::from(api_key.trim()),
        })
    }
}

impl MovieApiConnector {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> MovieApiConnectorBuilder {
        MovieApiConnectorBuilder::new()
    }

    /// Builds a connector from stored settings.
    ///
    /// # Errors
    ///
    /// Same as [`MovieApiConnectorBuilder::build`].
    pub fn from_config(config: &MovieApiConfig) -> Result<Self, ConfigError> {
        Self::builder()
            .api_base_url(config.api_base_url.as_str())
            .api_key(config.api_key.as_str())
            .build()
    }

    /// Returns the discovery URL without the API key.
    ///
    /// # Errors
    ///
    /// Returns `DiscoverError::Unexpected` if the base URL is not an
    /// absolute URL or the endpoint cannot be joined onto it.
    pub fn discover_url(&self) -> Result<Url, DiscoverError> {
        let base = parse_base_url(&self.base_url).map_err(|e| {
            DiscoverError::Unexpected(format!(
                "Movie API base URL {:?} is invalid: {e}",
                self.base_url
            ))
        })?;
        base.join(DISCOVER_ENDPOINT).map_err(|e| {
            DiscoverError::Unexpected(format!("failed to join URL path {DISCOVER_ENDPOINT}: {e}"))
        })
    }

    /// Sends the discovery request and classifies the response.
    async fn fetch_discovery(&self) -> DiscoverResult {
        let url = self.discover_url()?;
        tracing::info!(url = %url, "Requesting Movie API");

        let response = self
            .http_client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(DiscoverError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(DiscoverError::Transport)?;
        tracing::info!(status = status.as_u16(), response = %body, "Movie API response");

        if !status.is_success() {
            return Err(DiscoverError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let data: Value = serde_json::from_str(&body).map_err(DiscoverError::Decode)?;
        extract_results(data)
    }
}

impl LocalMovieApi for MovieApiConnector {
    #[instrument(skip_all)]
    async fn discover_movies(&self) -> DiscoverResult {
        tracing::info!("discover movies started");

        let result = self.fetch_discovery().await;
        match &result {
            Ok(movies) => tracing::info!(count = movies.len(), "discover movies succeeded"),
            Err(e) => tracing::error!(kind = %e.kind(), error = %e, "discover movies failed"),
        }

        tracing::info!("discover movies finished");
        result
    }
}

/// Drops values that are empty after trimming.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parses the base URL, rejecting URLs that cannot carry a path.
fn parse_base_url(raw: &str) -> Result<Url, url::ParseError> {
    let url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase);
    }
    Ok(url)
}

/// Extracts the TMDB `status_message` from a non-2xx response body,
/// falling back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<TmdbErrorResponse>(body).map_or_else(
        |_| String::from(body),
        |e| {
            tracing::debug!(status_code = e.status_code, "TMDB error body");
            e.status_message
        },
    )
}

/// Pulls the `results` array out of a decoded discovery response.
///
/// A JSON object without `results` (or with `results: null`) is a valid
/// empty answer; every other layout is a shape error.
fn extract_results(data: Value) -> DiscoverResult {
    let mut body = match data {
        Value::Object(body) => body,
        other => {
            return Err(DiscoverError::UnexpectedShape(format!(
                "expected a JSON object, got {}",
                value_kind(&other)
            )));
        }
    };

    match body.remove("results") {
        None | Some(Value::Null) => {
            tracing::warn!("Movie API response has no results field");
            Ok(MovieList::new())
        }
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => Ok(record),
                other => Err(DiscoverError::UnexpectedShape(format!(
                    "results[{index}] is {}, expected an object",
                    value_kind(&other)
                ))),
            })
            .collect(),
        Some(other) => Err(DiscoverError::UnexpectedShape(format!(
            "results is {}, expected an array",
            value_kind(&other)
        ))),
    }
}

/// Short name of a JSON value's type for error messages.
const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
