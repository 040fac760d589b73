#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;

#[test]
fn test_help_lists_subcommands() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("tmdbkit");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("movie"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("find"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_movie_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("tmdbkit");
    cmd.args(["movie", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--append"));
}

#[test]
fn test_episode_missing_arguments() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("tmdbkit");
    cmd.args(["episode", "--tv-id", "1399"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--season"));
}

#[test]
fn test_search_requires_query() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("tmdbkit");
    cmd.args(["search", "movie"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--query"));
}

#[test]
fn test_list_unknown_kind() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("tmdbkit");
    cmd.args(["list", "trending"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("now-playing"));
}

#[test]
fn test_find_unknown_source() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("tmdbkit");
    cmd.args(["find", "--external-id", "x", "--source", "myspace"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown external source: myspace"));
}

#[test]
fn test_movie_without_api_key_fails() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("tmdbkit");
    cmd.env_remove("TMDB_API_KEY")
        .args(["--dir", dir.path().to_str().unwrap(), "movie", "--id", "550"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TMDB API key is not set"));
}

#[test]
fn test_config_init_writes_file() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    // Act
    let mut cmd = cargo_bin_cmd!("tmdbkit");
    cmd.args([
        "--dir",
        dir_arg,
        "--language",
        "ja-JP",
        "config",
        "init",
        "--api-key",
        "abc123",
    ])
    .assert()
    .success();

    // Assert
    let content = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(content.contains("api_key = \"abc123\""));
    assert!(content.contains("language = \"ja-JP\""));
    assert!(content.contains("secure = true"));
}

#[test]
fn test_config_init_keeps_existing_key() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[tmdb]\napi_key = \"kept\"\nlanguage = \"en\"\n",
    )
    .unwrap();

    // Act
    let mut cmd = cargo_bin_cmd!("tmdbkit");
    cmd.args(["--dir", dir_arg, "config", "init", "--insecure"])
        .assert()
        .success();

    // Assert
    let content = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(content.contains("api_key = \"kept\""));
    assert!(content.contains("secure = false"));
}

#[test]
fn test_config_init_rerun_keeps_insecure() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[tmdb]\napi_key = \"kept\"\nlanguage = \"en\"\nsecure = false\n",
    )
    .unwrap();

    // Act
    let mut cmd = cargo_bin_cmd!("tmdbkit");
    cmd.args(["--dir", dir_arg, "config", "init", "--api-key", "fresh"])
        .assert()
        .success();

    // Assert
    let content = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(content.contains("api_key = \"fresh\""));
    assert!(content.contains("secure = false"));
}
