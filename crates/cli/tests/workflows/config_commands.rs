//! `config` subcommands

use crate::wall;
use anyhow::Result;
use tempfile::TempDir;

#[test]
fn test_config_example_is_loadable() -> Result<()> {
    let dir = TempDir::new()?;

    let result = wall!(dir.path(), "config", "example").assert_success()?;
    assert!(result.contains_stdout("[folders]"));
    assert!(result.contains_stdout("[server]"));

    // Feed the example straight back in
    std::fs::write(dir.path().join("example.toml"), &result.stdout)?;
    wall!(dir.path(), "--config", "example.toml", "config", "show").assert_success()?;
    Ok(())
}

#[test]
fn test_config_show_defaults() -> Result<()> {
    let dir = TempDir::new()?;

    let result = wall!(dir.path(), "config", "show").assert_success()?;
    assert!(result.contains_stdout("built-in defaults"));
    assert!(result.contains_stdout("5000"));
    Ok(())
}

#[test]
fn test_config_show_local_file() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("imagewall.toml"), "[server]\nport = 8123\n")?;

    let result = wall!(dir.path(), "config", "show").assert_success()?;
    assert!(result.contains_stdout("imagewall.toml"));
    assert!(result.contains_stdout("8123"));
    Ok(())
}

#[test]
fn test_config_path_reports_search_order() -> Result<()> {
    let dir = TempDir::new()?;

    let result = wall!(dir.path(), "config", "path").assert_success()?;
    assert!(result.contains_stdout("imagewall.toml"));
    assert!(result.contains_stdout("built-in defaults"));

    std::fs::write(dir.path().join("imagewall.toml"), "")?;
    let result = wall!(dir.path(), "config", "path").assert_success()?;
    assert!(result.contains_stdout("in use"));
    Ok(())
}

#[test]
fn test_missing_explicit_config_fails() -> Result<()> {
    let dir = TempDir::new()?;

    let result = wall!(dir.path(), "--config", "nope.toml", "folders").assert_failure()?;
    assert!(result.contains_stderr("nope.toml"));
    Ok(())
}
