//! Settings form for the movie API configuration.

use std::path::Path;

use anyhow::{Result, bail};

use super::config::AppConfig;

/// Form identifier.
pub const FORM_ID: &str = "filmbuff_api_config_page";

/// Base URL offered when none is stored yet.
const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org";

/// Confirmation shown after a successful submit.
const SAVED_MESSAGE: &str = "Your new configuration has been saved.";

/// A text field on the settings form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Machine name, matching the config key.
    pub name: &'static str,
    /// Label.
    pub title: &'static str,
    /// Help text.
    pub description: &'static str,
    /// Whether an empty value is rejected on submit.
    pub required: bool,
    /// Whether the value should be masked when displayed.
    pub secret: bool,
    /// Stored value, or the field default when nothing is stored.
    pub default_value: String,
}

/// Values submitted for the settings form. `None` keeps the field default.
#[derive(Debug, Default)]
pub struct FormSubmission {
    /// New API base URL.
    pub api_base_url: Option<String>,
    /// New API key.
    pub api_key: Option<String>,
}

impl FormSubmission {
    /// Returns the submitted value for the field named `name`.
    fn value_for(&self, name: &str) -> Option<&str> {
        match name {
            "api_base_url" => self.api_base_url.as_deref(),
            "api_key" => self.api_key.as_deref(),
            _ => None,
        }
    }
}

/// Builds the settings form, pre-filled from `config`.
#[must_use]
pub fn build_form(config: &AppConfig) -> Vec<FormField> {
    let api = &config.movie_api_config;
    let base_url = if api.api_base_url.is_empty() {
        String::from(DEFAULT_API_BASE_URL)
    } else {
        api.api_base_url.clone()
    };

    vec![
        FormField {
            name: "api_base_url",
            title: "API Base URL",
            description: "This is the API Base URL.",
            required: true,
            secret: false,
            default_value: base_url,
        },
        FormField {
            name: "api_key",
            title: "API Key (v3 auth)",
            description: "This is the API key that will be used to access the API.",
            required: true,
            secret: true,
            default_value: api.api_key.clone(),
        },
    ]
}

/// Validates a submission and persists it to `path`.
///
/// Omitted values fall back to the form defaults, so a first submit with
/// only an API key stores the default base URL alongside it.
///
/// # Errors
///
/// Returns an error if a required field ends up empty, or if the config
/// file cannot be read or written.
pub fn submit_form(path: &Path, submission: &FormSubmission) -> Result<&'static str> {
    let mut config = AppConfig::load(path)?;

    for field in build_form(&config) {
        let value = submission
            .value_for(field.name)
            .unwrap_or(field.default_value.as_str())
            .trim()
            .to_owned();
        if field.required && value.is_empty() {
            bail!("{} field is required.", field.title);
        }
        let api = &mut config.movie_api_config;
        match field.name {
            "api_base_url" => api.api_base_url = value,
            "api_key" => api.api_key = value,
            _ => {}
        }
    }

    config.save(path)?;

    tracing::debug!(path = %path.display(), form = FORM_ID, "settings saved");
    Ok(SAVED_MESSAGE)
}
