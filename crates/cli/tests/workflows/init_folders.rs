//! `init` and `folders` workflows

use crate::wall;
use anyhow::Result;
use tempfile::TempDir;

#[test]
fn test_init_creates_default_layout() -> Result<()> {
    let dir = TempDir::new()?;

    let result = wall!(dir.path(), "init").assert_success()?;
    assert!(result.contains_stdout("Initialized 9 folders"));
    assert!(result.contains_stdout("Placeholder images not found"));

    for i in 1..=9 {
        assert!(dir.path().join(format!("static/image{}", i)).is_dir());
    }
    assert!(!dir.path().join("static/image10").exists());

    Ok(())
}

#[test]
fn test_init_is_idempotent() -> Result<()> {
    let dir = TempDir::new()?;

    wall!(dir.path(), "init").assert_success()?;
    std::fs::write(dir.path().join("static/image1/Place1.jpg"), b"jpg")?;
    wall!(dir.path(), "init").assert_success()?;

    assert!(dir.path().join("static/image1/Place1.jpg").is_file());
    Ok(())
}

#[test]
fn test_init_with_custom_config() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(
        dir.path().join("wall.toml"),
        "[folders]\nroot = \"pics\"\nprefix = \"cam\"\ncount = 2\n",
    )?;

    let result = wall!(dir.path(), "--config", "wall.toml", "init").assert_success()?;
    assert!(result.contains_stdout("Initialized 2 folders"));

    assert!(dir.path().join("pics/cam1").is_dir());
    assert!(dir.path().join("pics/cam2").is_dir());
    assert!(!dir.path().join("static").exists());
    Ok(())
}

#[test]
fn test_init_write_config() -> Result<()> {
    let dir = TempDir::new()?;

    wall!(dir.path(), "init", "--write-config").assert_success()?;

    let written = std::fs::read_to_string(dir.path().join("imagewall.toml"))?;
    assert!(written.contains("count = 9"));

    // Second run picks up the local file and leaves it alone
    let result = wall!(dir.path(), "init", "--write-config").assert_success()?;
    assert!(result.contains_stdout("not writing"));
    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("imagewall.toml"), "[folders]\ncount = 0\n")?;

    let result = wall!(dir.path(), "init").assert_failure()?;
    assert!(result.contains_stderr("folders.count"));
    assert!(!dir.path().join("static").exists());
    Ok(())
}

#[test]
fn test_folders_lists_status() -> Result<()> {
    let dir = TempDir::new()?;
    wall!(dir.path(), "init").assert_success()?;
    std::fs::write(dir.path().join("static/image3/Place3.jpg"), b"jpg")?;

    let result = wall!(dir.path(), "folders").assert_success()?;
    for i in 1..=9 {
        assert!(result.contains_stdout(&format!("image{}", i)));
    }
    assert!(result.contains_stdout("ready"));
    assert!(result.contains_stdout("no placeholder"));
    Ok(())
}
