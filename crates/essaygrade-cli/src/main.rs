//! essaygrade CLI — grade essay answers from the command line or over stdio.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "essaygrade", version, about = "Lexical-overlap essay grader")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a single JSON request and print the response
    Grade {
        /// Request JSON file (reads stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Pretty-print the response
        #[arg(long)]
        pretty: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Serve newline-delimited JSON requests on stdin/stdout
    Serve {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Grade the built-in sample answers
    Demo,

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("essaygrade=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Grade {
            input,
            pretty,
            config,
        } => commands::grade::execute(input, pretty, config),
        Commands::Serve { config } => commands::serve::execute(config).await,
        Commands::Demo => commands::demo::execute(),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
