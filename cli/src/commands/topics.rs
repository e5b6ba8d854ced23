//! # Askpdf Topics Command
//!
//! File: cli/src/commands/topics.rs
//!
//! ## Overview
//!
//! This module implements the `askpdf topics` command, which displays the
//! active topic table to the user. It handles:
//! - Loading configuration to resolve the active table (built-in or custom)
//! - Formatting and displaying keyword/answer pairs in match order
//!
//! ## Examples
//!
//! Usage:
//!
//! ```bash
//! askpdf topics
//! askpdf topics --full
//! ```
//!
//! Example output:
//!
//! ```
//! Active topics (14):
//!
//! Keyword        | Answer
//! ---------------+--------------------------------------------------
//! range          | The LYRIQ has an estimated range of 530 km (WL...
//! battery        | The LYRIQ features a 102 kWh lithium-ion batte...
//! ...
//!
//! Matching is case-insensitive; the first keyword found in a question wins,
//! in the order shown. Questions matching no keyword get a default answer.
//! ```
//!
use crate::core::config;
use crate::core::error::Result;
use crate::responder::table::TopicTable;
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// Answers longer than this are truncated in the table unless `--full`.
const MAX_ANSWER_LEN: usize = 70;

/// # Topics Arguments (`TopicsArgs`)
///
/// Defines the command-line arguments accepted by the `askpdf topics`
/// subcommand.
#[derive(Parser, Debug)]
pub struct TopicsArgs {
    /// Print full answer texts instead of truncating them.
    #[arg(long)]
    pub full: bool,
}

// --- Functions ---

/// # Handle Topics Command (`handle_topics`)
///
/// Resolves the active topic table from configuration and prints it in
/// declaration (match) order.
///
/// ## Arguments
///
/// * `args`: The parsed `TopicsArgs` struct.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` if the table was displayed, or an `Err` if
///   configuration loading or table validation fails.
pub async fn handle_topics(args: TopicsArgs) -> Result<()> {
    info!("Handling topics command...");

    let cfg = config::load_config().context("Failed to load askpdf configuration")?;
    let table = cfg.topic_table()?;

    print_topic_table(&table, args.full);

    Ok(())
}

/// # Print Topic Table (`print_topic_table`)
///
/// Formats the table for the terminal. Handles the empty-table case and
/// explains the matching rules after the listing.
///
/// ## Arguments
///
/// * `table`: The active topic table.
/// * `full`: When false, answers are truncated to keep rows on one line.
fn print_topic_table(table: &TopicTable, full: bool) {
    if table.is_empty() {
        println!("\nThe active topic table is empty.");
        println!("Every question will receive the default answer.");
        return;
    }

    // Width of the keyword column, bounded to keep the table readable.
    let keyword_width = table
        .iter()
        .map(|entry| entry.keyword.len())
        .max()
        .unwrap_or(10)
        .clamp(10, 30);

    println!("\nActive topics ({}):\n", table.len());
    println!("{:<width$} | Answer", "Keyword", width = keyword_width);
    println!("{:-<width$}-+-{:-<50}", "", "", width = keyword_width);

    for entry in table.iter() {
        let answer = if full {
            entry.answer.clone()
        } else {
            display_answer(&entry.answer)
        };
        println!("{:<width$} | {}", entry.keyword, answer, width = keyword_width);
    }

    println!(
        "\nMatching is case-insensitive; the first keyword found in a question wins, in the order shown."
    );
    println!("Questions matching no keyword get a default answer.");
}

/// # Display Answer (`display_answer`)
///
/// Produces the single-line, truncated form of an answer for table rows:
/// internal whitespace collapses to single spaces (mirroring how answers
/// are emitted) and text beyond `MAX_ANSWER_LEN` is elided.
fn display_answer(answer: &str) -> String {
    let single_line = answer.split_whitespace().collect::<Vec<_>>().join(" ");

    if single_line.chars().count() > MAX_ANSWER_LEN {
        let mut truncated: String = single_line
            .chars()
            .take(MAX_ANSWER_LEN.saturating_sub(3))
            .collect();
        truncated.push_str("...");
        truncated
    } else {
        single_line
    }
}
