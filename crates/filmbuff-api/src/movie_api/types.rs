//! Movie API configuration and response types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::DiscoverError;

/// A single movie as returned in the `results` array.
///
/// The schema belongs to the upstream API and is passed through untouched.
pub type MovieRecord = Map<String, Value>;

/// Ordered list of movies from one discovery request.
pub type MovieList = Vec<MovieRecord>;

/// Outcome of a discovery request.
///
/// `Ok` with an empty list means the API answered with zero movies;
/// `Err` means the request itself failed.
pub type DiscoverResult = Result<MovieList, DiscoverError>;

/// Connection settings for the movie database API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct MovieApiConfig {
    /// Base URL, e.g. `https://api.themoviedb.org`.
    #[serde(default)]
    pub api_base_url: String,
    /// v3 API key sent as the `api_key` query parameter.
    #[serde(default)]
    pub api_key: String,
}

/// Error body returned by TMDB on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TmdbErrorResponse {
    /// TMDB-specific status code.
    pub status_code: u32,
    /// Human-readable message.
    pub status_message: String,
}
