//! List watched folders

use anyhow::Result;
use imagewall_core::{FolderSet, ImagewallConfig};
use owo_colors::OwoColorize;

pub fn run(config: &ImagewallConfig) -> Result<()> {
    let folders = FolderSet::from_config(&config.folders);

    println!("{}", "Watched Folders".bold());
    println!("{}: {}\n", "Root".dimmed(), folders.root().display());

    for folder in &folders {
        let status = if !folder.path.is_dir() {
            "missing folder".red().to_string()
        } else if folder.placeholder.is_file() {
            "ready".green().to_string()
        } else {
            "no placeholder".yellow().to_string()
        };

        println!("  {:<12} {}  {}", folder.name.cyan(), folder.path.display(), status);
        println!("  {:<12} {}", "", folder.placeholder.display().dimmed());
    }

    Ok(())
}
