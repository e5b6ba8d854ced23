//! # Askpdf Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! This module provides shared utility functions used across the integration
//! test files (`ask.rs`, `topics.rs`). Integration tests live in `cli/tests/`
//! and each `.rs` file there (that isn't a module like this one) is compiled
//! as a separate test crate linked against the `askpdf` binary crate.
//!

// Allow potentially unused code in this common module, as different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

/// # Get Askpdf Command (`askpdf_cmd`)
///
/// Helper function to create an `assert_cmd::Command` instance pointing to
/// the compiled `askpdf` binary target for the current test run.
///
/// ## Panics
/// Panics if the `askpdf` binary cannot be found via `Command::cargo_bin`.
pub fn askpdf_cmd() -> Command {
    Command::cargo_bin("askpdf").expect("Failed to find askpdf binary for testing")
}

/// Answer text of the built-in `battery` topic.
pub const BATTERY_ANSWER: &str =
    "The LYRIQ features a 102 kWh lithium-ion battery with Ultium technology and active liquid cooling.";

/// Answer text of the built-in `range` topic.
pub const RANGE_ANSWER: &str =
    "The LYRIQ has an estimated range of 530 km (WLTP) on a full charge.";

/// The default answer for questions matching no keyword.
pub const DEFAULT_ANSWER: &str =
    "I can help answer questions about the PDF content. Please upload a PDF, and feel free to ask about specific details within the document.";

/// The contextual prefix applied to pdf/document/file/upload questions.
pub const CONTEXT_PREFIX: &str = "As a PDF assistant, ";
