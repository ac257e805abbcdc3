#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::{PredicateBooleanExt, predicate};

#[test]
fn test_config_set_saves_settings() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("filmbuff");
    cmd.env_remove("RUST_LOG")
        .arg("--dir")
        .arg(dir.path())
        .args(["config", "set", "--api-key", "abc123"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Your new configuration has been saved.",
        ));

    let saved = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(saved.contains("[movie_api_config]"));
    assert!(saved.contains(r#"api_key = "abc123""#));
    assert!(saved.contains(r#"api_base_url = "https://api.themoviedb.org""#));
}

#[test]
fn test_config_set_requires_api_key() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("filmbuff");
    cmd.env_remove("RUST_LOG")
        .arg("--dir")
        .arg(dir.path())
        .args(["config", "set"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "API Key (v3 auth) field is required.",
        ));
}

#[test]
fn test_config_show_masks_api_key() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[movie_api_config]\napi_base_url = \"https://movies.example.com\"\napi_key = \"0123456789abcdef\"\n",
    )
    .unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("filmbuff");
    cmd.env_remove("RUST_LOG")
        .arg("--dir")
        .arg(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://movies.example.com"))
        .stdout(predicate::str::contains("****cdef"))
        .stdout(predicate::str::contains("0123456789abcdef").not());
}

#[test]
fn test_config_set_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("filmbuff");
    cmd.args(["config", "set", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--api-base-url"))
        .stdout(predicate::str::contains("--api-key"));
}
