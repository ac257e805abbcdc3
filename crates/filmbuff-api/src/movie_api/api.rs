//! `MovieApi` trait definition.
#![allow(clippy::future_not_send)]

use super::types::DiscoverResult;

/// Movie database API trait.
///
/// Abstracts the connector so the listing presenter can run against fakes.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(MovieApi: Send)]
pub trait LocalMovieApi {
    /// Fetches the default discovery list of movies.
    ///
    /// Failures are classified in the returned `DiscoverError`; this
    /// method never panics on API errors.
    async fn discover_movies(&self) -> DiscoverResult;
}
