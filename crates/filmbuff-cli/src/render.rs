//! Text and JSON rendering of the movie listing page.

use anyhow::{Context, Result};
use filmbuff_api::listing::ListingPage;
use filmbuff_api::movie_api::MovieRecord;
use serde_json::Value;

/// Renders the page as tab-separated lines.
#[must_use]
pub fn render_text(page: &ListingPage) -> Vec<String> {
    let mut lines = Vec::with_capacity(page.movies.len().saturating_add(2));

    if page.movies.is_empty() {
        lines.push(String::from("No movies to display."));
    } else {
        lines.push(String::from("ID\tReleaseDate\tTitle"));
        lines.extend(page.movies.iter().map(|movie| {
            format!(
                "{}\t{}\t{}",
                field_text(movie, "id"),
                field_text(movie, "release_date"),
                movie_title(movie),
            )
        }));
    }

    lines.push(format!("Total: {} movies", page.movies.len()));
    lines
}

/// Renders the page as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(page: &ListingPage) -> Result<String> {
    serde_json::to_string_pretty(page).context("failed to serialize listing page")
}

/// Display title: `title`, then `name`, then `id`.
fn movie_title(movie: &MovieRecord) -> String {
    ["title", "name", "id"]
        .iter()
        .map(|key| field_text(movie, key))
        .find(|text| text != "-")
        .unwrap_or_else(|| String::from("(untitled)"))
}

/// Formats a scalar field, `-` when absent or empty.
fn field_text(movie: &MovieRecord, key: &str) -> String {
    match movie.get(key) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::from("-"),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use filmbuff_api::listing::{CacheDirective, LISTING_THEME};
    use serde_json::json;

    use super::*;

    fn page_with(movies: Value) -> ListingPage {
        ListingPage {
            theme: LISTING_THEME,
            movies: serde_json::from_value(movies).unwrap(),
            cache: CacheDirective::never(),
        }
    }

    #[test]
    fn test_render_text_lists_movies_in_order() {
        // Arrange
        let page = page_with(json!([
            {"id": 693_134, "title": "Dune: Part Two", "release_date": "2024-02-27"},
            {"id": 929_590, "title": "Civil War", "release_date": "2024-04-10"},
        ]));

        // Act
        let lines = render_text(&page);

        // Assert
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "693134\t2024-02-27\tDune: Part Two");
        assert_eq!(lines[2], "929590\t2024-04-10\tCivil War");
        assert_eq!(lines[3], "Total: 2 movies");
    }

    #[test]
    fn test_render_text_falls_back_for_missing_fields() {
        // Arrange
        let page = page_with(json!([{"id": 42, "name": "Untitled Project"}, {}]));

        // Act
        let lines = render_text(&page);

        // Assert
        assert_eq!(lines[1], "42\t-\tUntitled Project");
        assert_eq!(lines[2], "-\t-\t(untitled)");
    }

    #[test]
    fn test_render_text_empty_page() {
        // Arrange
        let page = page_with(json!([]));

        // Act
        let lines = render_text(&page);

        // Assert
        assert_eq!(lines, ["No movies to display.", "Total: 0 movies"]);
    }

    #[test]
    fn test_render_json_carries_cache_directive() {
        // Arrange
        let page = page_with(json!([{"id": 1, "title": "A"}]));

        // Act
        let rendered = render_json(&page).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        // Assert
        assert_eq!(value["theme"], "filmbuff_template");
        assert_eq!(value["cache"]["max_age"], 0);
        assert_eq!(value["movies"][0]["title"], "A");
    }
}
