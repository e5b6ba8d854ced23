//! # Askpdf Responder
//!
//! File: cli/src/responder/mod.rs
//!
//! ## Overview
//!
//! This module implements the responder: the component that maps one
//! question to one answer and streams it out with simulated typing latency.
//! It owns the topic table and the selection rules; the actual timed
//! emission lives in the `stream` submodule.
//!
//! ## Architecture
//!
//! Answer selection is a pure function of the question and the table:
//! 1. Lowercase the question.
//! 2. Scan the table in declaration order; the first keyword contained in
//!    the question wins.
//! 3. Fall back to a fixed default answer when nothing matches.
//! 4. Independently of which branch fired, prepend `"As a PDF assistant, "`
//!    when the question mentions pdf/document/file/upload. The prefix check
//!    is purely substring-triggered and runs even when a topic unrelated to
//!    PDFs matched.
//!
//! There is no state machine and no retained state: one question in, one
//! answer out, per process run.
//!
use crate::responder::table::TopicTable;

/// Topic table storage and validation.
pub mod table;
/// Timed word-by-word answer emission.
pub mod stream;

/// Answer used when no table keyword matches the question.
pub const DEFAULT_ANSWER: &str = "I can help answer questions about the PDF content. \
     Please upload a PDF, and feel free to ask about specific details within the document.";

/// Prefix applied when the question mentions PDFs or documents.
const CONTEXT_PREFIX: &str = "As a PDF assistant, ";

/// Substrings that trigger the contextual prefix.
const CONTEXT_TERMS: [&str; 4] = ["pdf", "document", "file", "upload"];

/// Maps questions to answers against an immutable topic table.
pub struct Responder {
    table: TopicTable,
}

impl Responder {
    /// Creates a responder over the given table.
    pub fn new(table: TopicTable) -> Self {
        Self { table }
    }

    /// # Answer Selection (`answer`)
    ///
    /// Selects the answer for `question`. Accepts any string, including the
    /// empty string; never fails.
    ///
    /// ## Arguments
    ///
    /// * `question`: The raw question text, as supplied by the caller.
    ///
    /// ## Returns
    ///
    /// * `String`: The selected answer, with the contextual prefix applied
    ///   when the question mentions pdf/document/file/upload.
    pub fn answer(&self, question: &str) -> String {
        let normalized = question.to_lowercase();

        let base = self
            .table
            .lookup(&normalized)
            .unwrap_or(DEFAULT_ANSWER);

        // The prefix check runs unconditionally after selection, so it can
        // decorate a matched topic answer or the default answer alike.
        if CONTEXT_TERMS.iter().any(|term| normalized.contains(term)) {
            format!("{}{}", CONTEXT_PREFIX, base)
        } else {
            base.to_string()
        }
    }
}
