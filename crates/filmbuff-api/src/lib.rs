//! API client library for filmbuff.
//!
//! Provides the movie database connector and the presenter that turns its
//! output into a movie listing page.

/// Movie listing presenter.
pub mod listing;

/// Movie database API connector.
pub mod movie_api;
