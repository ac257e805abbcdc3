//! Movie database API connector module.
//!
//! Issues the TMDB v3 movie discovery request and classifies every
//! failure instead of hiding it behind an empty list.

mod api;
mod connector;
mod error;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalMovieApi, MovieApi};
#[allow(clippy::module_name_repetitions)]
pub use connector::{DISCOVER_ENDPOINT, MovieApiConnector, MovieApiConnectorBuilder};
pub use error::{ConfigError, DiscoverError, DiscoverErrorKind};
#[allow(clippy::module_name_repetitions)]
pub use types::{DiscoverResult, MovieApiConfig, MovieList, MovieRecord};
