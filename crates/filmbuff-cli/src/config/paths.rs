//! Config file location.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Directory name under the XDG config home.
const APP_DIR: &str = "filmbuff";

/// File holding the `[movie_api_config]` table.
const CONFIG_FILE: &str = "config.toml";

/// Resolves the config file path from the process environment.
///
/// # Errors
///
/// See [`resolve_config_path_with`].
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    resolve_config_path_with(dir, |key| std::env::var_os(key))
}

/// Resolves the config file path, looking variables up through `env`.
///
/// In order of precedence:
/// 1. `{dir}/config.toml` when `--dir` is given.
/// 2. `$XDG_CONFIG_HOME/filmbuff/config.toml` when it is set to an absolute path.
/// 3. `$HOME/.config/filmbuff/config.toml`.
///
/// # Errors
///
/// Returns an error if neither `--dir`, an absolute `XDG_CONFIG_HOME` nor
/// `HOME` is available.
pub fn resolve_config_path_with<F>(dir: Option<&PathBuf>, env: F) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    if let Some(d) = dir {
        return Ok(d.join(CONFIG_FILE));
    }

    // Relative values are invalid per the XDG base directory rules.
    let xdg = env("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|p| p.is_absolute());
    if let Some(config_home) = xdg {
        return Ok(app_config_file(&config_home));
    }

    match env("HOME").filter(|home| !home.is_empty()) {
        Some(home) => Ok(app_config_file(&PathBuf::from(home).join(".config"))),
        None => bail!("cannot locate the config file: set --dir, XDG_CONFIG_HOME or HOME"),
    }
}

fn app_config_file(config_home: &Path) -> PathBuf {
    config_home.join(APP_DIR).join(CONFIG_FILE)
}
