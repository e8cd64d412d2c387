//! Configuration inspection command
//!
//! Provides a CLI view of the effective configuration and where it comes from.

use crate::util;
use anyhow::Result;
use imagewall_core::config::{self, MAX_FOLDERS};
use owo_colors::OwoColorize;
use std::path::Path;

/// Print the effective configuration
pub fn run_show(explicit: Option<&Path>) -> Result<()> {
    let (config, origin) = util::load_config(explicit)?;

    println!("{}", "Configuration".bold());
    match &origin {
        Some(path) => println!("{}: {}\n", "Location".dimmed(), path.display().dimmed()),
        None => println!("{}: {}\n", "Location".dimmed(), "built-in defaults".dimmed()),
    }

    println!("{}", "[folders]".yellow());
    println!("  {} = {}", "root".cyan(), config.folders.root.display());
    println!("  {} = {}", "prefix".cyan(), config.folders.prefix);
    println!(
        "  {} = {} {}",
        "count".cyan(),
        config.folders.count,
        format!(
            "({}1 .. {}{})",
            config.folders.prefix, config.folders.prefix, config.folders.count
        )
        .dimmed()
    );
    println!("  {} = {}", "placeholder_stem".cyan(), config.folders.placeholder_stem);
    println!("  {} = {}", "placeholder_ext".cyan(), config.folders.placeholder_ext);

    println!("\n{}", "[server]".yellow());
    println!("  {} = {}", "host".cyan(), config.server.host);
    println!("  {} = {}", "port".cyan(), config.server.port);
    println!(
        "  {} = {} {}",
        "shutdown_timeout_secs".cyan(),
        config.server.shutdown_timeout_secs,
        format!("({}s)", config.server.shutdown_timeout_secs).dimmed()
    );

    println!("\n{}", "Valid Ranges:".bold());
    println!("  count: 1-{}", MAX_FOLDERS);
    println!("  port: 1-65535");

    Ok(())
}

/// Show which config file is used and the search order
pub fn run_path(explicit: Option<&Path>) -> Result<()> {
    if let Some(path) = explicit {
        println!("{}", path.display());
        if !path.is_file() {
            println!("{}", "File does not exist.".yellow());
        }
        return Ok(());
    }

    println!("{}", "Search order:".bold());
    let mut found = false;
    for candidate in config::search_paths() {
        let marker = if !found && candidate.is_file() {
            found = true;
            "✓ in use".green().to_string()
        } else if candidate.is_file() {
            "shadowed".dimmed().to_string()
        } else {
            "not found".dimmed().to_string()
        };
        println!("  {}  {}", candidate.display(), marker);
    }

    if !found {
        println!("{}", "No config file found; using built-in defaults.".yellow());
    }

    Ok(())
}

/// Show example configuration
pub fn run_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}
