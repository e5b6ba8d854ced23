//! # Askpdf Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the commands that comprise the askpdf CLI. It
//! serves as the central point for importing command modules to make them
//! accessible to the main application entry point (`main.rs`).
//!
//! ## Commands
//!
//! - `ask`: The default action: answer one question with simulated
//!   streaming. Invoked with a positional argument or, absent one,
//!   interactively. It is not a named subcommand so that
//!   `askpdf "question"` works directly.
//! - `topics`: Lists the active topic table in declaration order.
//!
//! Each command defines its own arguments structure and handler function.
//!

/// Default action: answer one question, streamed word by word.
pub mod ask;
/// Lists the active topic table (keywords and answers) in match order.
pub mod topics;
