//! # Askpdf Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! ## Overview
//!
//! This module implements the default askpdf action: take one question,
//! select the canned answer for it, and stream the answer to stdout word by
//! word. It handles:
//! - Resolving the question (positional argument, or one interactive line)
//! - Loading configuration (delay, custom topic table)
//! - Delegating selection and emission to the responder
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Load askpdf configuration and build the active topic table
//! 2. Resolve the question: the positional argument if given, otherwise
//!    prompt on stdout and read exactly one line from stdin
//! 3. Select the answer via the responder
//! 4. Emit the answer word by word with the configured inter-word delay
//!
//! ## Examples
//!
//! Usage:
//!
//! ```bash
//! askpdf "What is the range?"
//! askpdf                     # prompts: Enter your question:
//! askpdf -d 0 "battery?"     # no typing delay, for scripting
//! ```
//!
//! Exactly one answer is produced per invocation; there is no session and
//! no history. Running out of stdin before a line could be read is the one
//! unrecoverable input condition and is reported as an error.
//!
use crate::core::config;
use crate::core::error::{AskpdfError, Result};
use crate::responder::{stream, Responder};
use anyhow::Context;
use clap::Args;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::{debug, info};

/// # Ask Arguments (`AskArgs`)
///
/// Defines the arguments accepted by the default ask action. These are
/// flattened into the top-level CLI so that `askpdf "question"` works
/// without a subcommand.
#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question to answer. Prompts interactively when omitted.
    pub question: Option<String>,

    /// Inter-word delay in milliseconds (overrides configuration).
    #[arg(short = 'd', long = "delay-ms", value_name = "MS")]
    pub delay_ms: Option<u64>,
}

// --- Functions ---

/// # Handle Ask Command (`handle_ask`)
///
/// The main asynchronous handler for answering one question.
///
/// ## Workflow:
/// 1. Loads configuration via `config::load_config()` and resolves the
///    active topic table (built-in or custom).
/// 2. Resolves the question from the positional argument, or prompts and
///    reads one line from stdin.
/// 3. Selects the answer via `Responder::answer` (never fails; unmatched
///    questions get the default answer).
/// 4. Streams the answer to stdout with the effective inter-word delay
///    (`--delay-ms` wins over configuration).
///
/// ## Arguments
///
/// * `args`: The parsed `AskArgs` struct.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` once the answer was fully emitted.
/// * `Err`: If configuration is invalid or no question could be read.
pub async fn handle_ask(args: AskArgs) -> Result<()> {
    info!("Handling ask command...");

    let cfg = config::load_config().context("Failed to load askpdf configuration")?;
    let table = cfg.topic_table()?;
    debug!("Active topic table has {} entries", table.len());
    let responder = Responder::new(table);

    let question = match args.question {
        Some(question) => question,
        None => read_question_interactively()?,
    };
    debug!("Question: {:?}", question);

    let answer = responder.answer(&question);

    let delay = Duration::from_millis(args.delay_ms.unwrap_or(cfg.responder.delay_ms));
    let mut out = io::stdout();
    stream::emit_words(&mut out, &answer, delay).await?;

    Ok(())
}

/// # Read Question Interactively (`read_question_interactively`)
///
/// Prints the prompt and reads one line from stdin. The trailing line
/// terminator is stripped; the question text is otherwise untouched.
///
/// ## Returns
///
/// * `Result<String>`: The line read, or an `Err` if stdin is exhausted
///   (end of input with no line available) or unreadable.
fn read_question_interactively() -> Result<String> {
    print!("Enter your question: ");
    io::stdout()
        .flush()
        .context("Failed to flush stdout before reading question")?;

    let mut line = String::new();
    let bytes_read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read question from stdin")?;

    if bytes_read == 0 {
        return Err(AskpdfError::Input(
            "no question provided on stdin".to_string(),
        ))?;
    }

    Ok(trim_line_terminator(&line).to_string())
}

/// Strips one trailing `\n` or `\r\n` from a line read off stdin.
fn trim_line_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(line)
}
