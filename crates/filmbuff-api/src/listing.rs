//! `MovieListing` - presenter for the movie listing page.

use serde::Serialize;
use tracing::instrument;

use crate::movie_api::{LocalMovieApi, MovieList};

/// Template the listing page is rendered with.
pub const LISTING_THEME: &str = "filmbuff_template";

/// Cache directive attached to a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheDirective {
    /// Seconds the page may be cached; `0` means never.
    pub max_age: u32,
}

impl CacheDirective {
    /// A directive forbidding any caching.
    #[must_use]
    pub const fn never() -> Self {
        Self { max_age: 0 }
    }
}

/// Display model for the movie listing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingPage {
    /// Template name.
    pub theme: &'static str,
    /// Movies to display, possibly empty.
    pub movies: MovieList,
    /// Always [`CacheDirective::never`]: every request re-fetches.
    pub cache: CacheDirective,
}

/// Builds listing pages from a movie API.
#[derive(Debug)]
pub struct MovieListing<A> {
    api: A,
}

impl<A: LocalMovieApi> MovieListing<A> {
    /// Wraps a movie API.
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    /// Builds the listing page. Never fails: API errors yield no movies.
    #[instrument(skip_all)]
    pub async fn view(&self) -> ListingPage {
        let movies = self.list_movies().await;

        ListingPage {
            theme: LISTING_THEME,
            movies,
            cache: CacheDirective::never(),
        }
    }

    /// Retrieves the movie list, substituting an empty list on failure.
    pub async fn list_movies(&self) -> MovieList {
        match self.api.discover_movies().await {
            Ok(movies) => movies,
            Err(e) => {
                tracing::error!(kind = %e.kind(), "{e}");
                MovieList::new()
            }
        }
    }
}
