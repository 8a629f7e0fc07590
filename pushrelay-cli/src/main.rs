mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cli::handlers::{self, TargetArgs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pushrelay")]
#[command(version)]
#[command(about = "Deliver notification pages to end-users and inspect pushed documents")]
struct Cli {
    /// Path to configuration file (default: <config dir>/pushrelay/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Push a message to an end-user
    ///
    /// Examples:
    ///   pushrelay push "Hello" --user 42 --service svc --protocol telegram --domain d.example
    ///   pushrelay push "Привет" --language ru --back-url "http://cb/" ...
    Push {
        /// Message to deliver (embedded as-is in the page)
        message: String,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Print the notification page and push URL without sending anything
    Render {
        /// Message to render
        message: String,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Write a default configuration file
    Config {
        /// Create the configuration file
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Push { message, target } => {
            handlers::handle_push(cli.config, message, target).await?;
        }
        Commands::Render { message, target } => {
            handlers::handle_render(cli.config, message, target)?;
        }
        Commands::Config { init } => {
            if init {
                handlers::handle_config_init(cli.config)?;
            } else {
                println!("Config command requires --init flag");
                println!("Usage: pushrelay config --init [--config PATH]");
            }
        }
    }

    Ok(())
}
