//! # Askpdf Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the askpdf CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! The default action answers one question: `askpdf "question"` treats the
//! positional argument as the question, and plain `askpdf` prompts for one
//! line on stdin. The `topics` subcommand lists the active topic table.
//! All errors are propagated to this level for consistent handling; logs go
//! to stderr so that stdout carries only the answer.
//!
//! ## Examples
//!
//! Basic askpdf usage:
//!
//! ```bash
//! # Ask directly
//! askpdf "What is the range?"
//!
//! # Prompt interactively
//! askpdf
//!
//! # Inspect the topic table, with increased verbosity
//! askpdf topics -vv
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to the appropriate command handler
//! 4. Format and display any errors that occur
//!
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Command logic (ask, topics).
mod core; // Core infrastructure (errors, config).
mod responder; // Domain logic (topic table, answer selection, streaming).

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "askpdf",
    about = "📄 askpdf: keyword-matched answers about PDF content, streamed word by word",
    long_about = "Answer free-text questions from a fixed topic table and stream the answer\n\
                  word by word with a typing delay. Matching is case-insensitive substring\n\
                  containment; the first keyword in table order wins.",
    propagate_version = true,
    version,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(flatten)]
    ask: commands::ask::AskArgs,
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining the available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(alias = "t")]
    Topics(commands::topics::TopicsArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Some(Commands::Topics(args)) => commands::topics::handle_topics(args).await,
        None => commands::ask::handle_ask(cli.ask).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
