//! imagewall CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cmd;
mod util;

/// imagewall - Serve the newest image from each watched folder
#[derive(Parser)]
#[command(name = "imagewall")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: ./imagewall.toml, then the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch the folders and serve the image wall
    Serve {
        /// Address to bind (overrides server.host)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Create the watched folder tree
    Init {
        /// Also write the effective config to ./imagewall.toml if missing
        #[arg(long)]
        write_config: bool,
    },
    /// List watched folders
    Folders,
    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file in use and the search path
    Path,
    /// Print an annotated example configuration
    Example,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Guard must outlive every log call
    let _log_guard = util::init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Serve { host, port } => {
            let (config, _) = util::load_config(cli.config.as_deref())?;
            cmd::serve::run(config, host, port).await
        }
        Commands::Init { write_config } => {
            let (config, origin) = util::load_config(cli.config.as_deref())?;
            cmd::init::run(&config, write_config, origin.as_deref())
        }
        Commands::Folders => {
            let (config, _) = util::load_config(cli.config.as_deref())?;
            cmd::folders::run(&config)
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Show => cmd::config::run_show(cli.config.as_deref()),
            ConfigCommands::Path => cmd::config::run_path(cli.config.as_deref()),
            ConfigCommands::Example => cmd::config::run_example(),
        },
    }
}
