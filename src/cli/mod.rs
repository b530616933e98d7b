use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod draft;
pub mod serve;
pub mod token;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "3000")]
        port: String,
    },
    /// Print the calendar event a reservation payload would create
    Draft {
        /// Path to a reservation request JSON file
        #[arg(long)]
        file: PathBuf,
    },
    /// Fetch an access token to check the configured credentials
    Token {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    crate::api::init_tracing();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::Draft { file }) => {
            draft::run(&file)?;
        }
        Some(Command::Token {}) => {
            token::run().await?;
        }
        None => {}
    }

    Ok(())
}
