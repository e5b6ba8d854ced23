//! # Askpdf Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used
//! throughout the askpdf application. It provides a consistent approach to
//! error management with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `AskpdfError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover the domains the application can actually fail in:
//! - Configuration errors (unreadable or invalid TOML, bad paths)
//! - Topic table errors (empty or duplicate keywords in a custom table)
//! - Input errors (no question available on stdin)
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if keyword.is_empty() {
//!     return Err(AskpdfError::TopicTable("keyword must not be empty".into()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read config file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the askpdf application.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AskpdfError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Topic table error: {0}")]
    TopicTable(String),

    #[error("Input error: {0}")]
    Input(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
