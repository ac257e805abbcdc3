//! Application configuration module.
//!
//! Manages the TOML config file holding the movie API settings and the
//! settings form used to edit them.

#[allow(clippy::module_inception)]
mod config;
mod form;
mod paths;

#[allow(clippy::module_name_repetitions)]
pub use config::AppConfig;
pub use form::{FORM_ID, FormSubmission, build_form, submit_form};
pub use paths::resolve_config_path;
