//! Create the watched folder tree

use crate::util;
use anyhow::{Context, Result};
use imagewall_core::config::LOCAL_CONFIG_FILE;
use imagewall_core::ImagewallConfig;
use owo_colors::OwoColorize;
use std::path::Path;

pub fn run(config: &ImagewallConfig, write_config: bool, origin: Option<&Path>) -> Result<()> {
    let folders = util::prepare_folders(&config.folders)?;

    println!("Initialized {} folders under {}", folders.len(), folders.root().display());
    println!();

    for folder in &folders {
        println!("  {} {}", "✓".green(), folder.path.display());
    }

    let missing = folders.missing_placeholders();
    if !missing.is_empty() {
        println!();
        println!("{}", "Placeholder images not found:".yellow());
        for folder in missing {
            println!("  - {}", folder.placeholder.display());
        }
        println!("Folders show nothing until a placeholder exists or an image is added.");
    }

    if write_config {
        match origin {
            Some(path) => println!("\nConfig already loaded from {}, not writing", path.display()),
            None => {
                let path = Path::new(LOCAL_CONFIG_FILE);
                config
                    .save(path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("\n{} Wrote {}", "✓".green(), path.display());
            }
        }
    }

    println!();
    println!("Next steps:");
    println!("  - Run 'imagewall serve' to start watching");
    println!("  - Drop .png/.jpg/.jpeg files into a folder to update the wall");
    Ok(())
}
