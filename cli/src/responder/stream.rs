//! # Askpdf Word Streaming
//!
//! File: cli/src/responder/stream.rs
//!
//! ## Overview
//!
//! This module implements the cosmetic "typing" emission of an answer: the
//! answer is split on whitespace into word tokens, and tokens are written to
//! the output one at a time with a fixed delay after each, followed by a
//! trailing newline. The stream is flushed after every token so the words
//! appear incrementally on a terminal.
//!
//! ## Architecture
//!
//! Emission is strictly sequential; the delay suspends the single task
//! driving the command. This is simulated streaming, not real asynchronous
//! I/O: the async signature exists only so the delay can use the runtime's
//! timer.
//!
//! Tokens are joined by single spaces regardless of the whitespace in the
//! source answer, so an answer containing internal newlines is emitted as
//! one space-separated line.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::io::Write;
use std::time::Duration;

/// # Emit Words (`emit_words`)
///
/// Writes `answer` to `out` word by word.
///
/// ## Workflow:
/// 1. Split `answer` on whitespace into tokens.
/// 2. Write each token, preceded by a single space for every token after the
///    first, flushing after each write.
/// 3. Sleep `delay` after each token (skipped entirely when `delay` is zero).
/// 4. Write a trailing newline and flush.
///
/// ## Guarantees
///
/// Concatenating the emitted tokens with single spaces and appending the
/// newline reproduces the answer as a single line. An answer with no tokens
/// emits only the newline.
///
/// ## Arguments
///
/// * `out`: Destination stream (stdout in production, a buffer in tests).
/// * `answer`: The final, possibly prefixed, answer text.
/// * `delay`: Inter-word delay.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` once the full answer and newline are written, or
///   an `Err` if any write to `out` fails.
pub async fn emit_words<W: Write>(out: &mut W, answer: &str, delay: Duration) -> Result<()> {
    for (index, word) in answer.split_whitespace().enumerate() {
        if index > 0 {
            write!(out, " ").context("Failed to write to output stream")?;
        }
        write!(out, "{}", word).context("Failed to write to output stream")?;
        out.flush().context("Failed to flush output stream")?;

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    writeln!(out).context("Failed to write to output stream")?;
    out.flush().context("Failed to flush output stream")?;
    Ok(())
}
