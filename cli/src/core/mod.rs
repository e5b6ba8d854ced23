//! # Askpdf Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure of the askpdf CLI: the
//! pieces every command relies on but which are not themselves commands.
//!
//! ## Modules
//!
//! - `config`: Loading and validating TOML configuration (delay, custom topics)
//! - `error`: The `AskpdfError` enum and the application `Result` alias
//!
//! Domain logic (the topic table and the streaming responder) lives in the
//! top-level `responder` module, not here.

/// Configuration loading, merging precedence, and the topic table source selection.
pub mod config;
/// Error types (`AskpdfError`) and the application-wide `Result` alias.
pub mod error;
