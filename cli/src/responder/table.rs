//! # Askpdf Topic Table
//!
//! File: cli/src/responder/table.rs
//!
//! ## Overview
//!
//! This module defines the topic table: the ordered set of (keyword, answer)
//! pairs the responder matches questions against. The table is built once at
//! startup and is immutable for the lifetime of the process.
//!
//! ## Architecture
//!
//! Declaration order is load-bearing: answer selection is first-match-wins,
//! so the table is stored as an ordered list of pairs rather than a map.
//! Keywords are held lowercased; matching is substring containment against
//! the lowercased question, performed by the responder.
//!
//! The built-in table carries the fourteen original entries describing the
//! LYRIQ plus three generic PDF topics. Custom tables (from configuration)
//! replace it entirely and are validated on construction.
//!
use crate::core::error::{AskpdfError, Result};
use serde::Deserialize;

/// One (keyword, answer) pair.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TopicEntry {
    /// Keyword matched as a case-insensitive substring of the question.
    pub keyword: String,
    /// Canned answer emitted when the keyword matches first.
    pub answer: String,
}

/// The ordered, immutable set of topic entries.
///
/// Iteration order is declaration order; the responder relies on it for
/// first-match tie-breaking.
#[derive(Debug, Clone)]
pub struct TopicTable {
    entries: Vec<TopicEntry>,
}

impl TopicTable {
    /// Builds the built-in table: the original fourteen entries, in their
    /// original declaration order.
    pub fn builtin() -> Self {
        let entries = [
            (
                "range",
                "The LYRIQ has an estimated range of 530 km (WLTP) on a full charge.",
            ),
            (
                "battery",
                "The LYRIQ features a 102 kWh lithium-ion battery with Ultium technology and active liquid cooling.",
            ),
            (
                "power",
                "The LYRIQ produces 528 horsepower (388 kW) and 610 Nm of torque.",
            ),
            (
                "charging",
                "The LYRIQ supports DC fast charging up to 190 kW, which can add approximately 200 km of range in 10 minutes.",
            ),
            (
                "awards",
                "The Cadillac LYRIQ received the German Car of the Year 2025 award in the Luxury Category, the first American brand to receive this accolade.",
            ),
            (
                "dimensions",
                "The LYRIQ's dimensions are:\nLength: 4,996 mm\nWidth: 1,977 mm\nHeight: 1,623 mm\nWheelbase: 3,094 mm\nGround Clearance: 151 mm",
            ),
            (
                "features",
                "The LYRIQ includes a 33-inch diagonal LED display, Super Cruise hands-free driving technology, AKG Studio 19-speaker audio system, and Vehicle-to-Home capability.",
            ),
            (
                "warranty",
                "The LYRIQ comes with a comprehensive warranty package including an 8-year/160,000 km battery warranty.",
            ),
            (
                "safety",
                "The LYRIQ includes advanced safety features such as Forward Collision Alert, Automatic Emergency Braking, Lane Keep Assist, and HD Surround Vision.",
            ),
            (
                "specifications",
                "The LYRIQ is powered by electric motors producing 388 kW, has a 102 kWh battery, 530 km range, and can accelerate from 0-100 km/h in 4.9 seconds.",
            ),
            (
                "maintenance",
                "The LYRIQ requires less maintenance than traditional vehicles, with no oil changes needed. Regular service includes tire rotations, cabin air filter replacement, and battery health checks.",
            ),
            (
                "pdf",
                "I can help you understand PDFs by analyzing their content, extracting key information, and answering specific questions about what's in the document.",
            ),
            (
                "document",
                "I can analyze documents to extract key information, summarize content, and answer specific questions about what's contained in them.",
            ),
            (
                "extract",
                "I can extract information from PDFs including text, tables, and structured data to help you understand the content.",
            ),
        ]
        .into_iter()
        .map(|(keyword, answer)| TopicEntry {
            keyword: keyword.to_string(),
            answer: answer.to_string(),
        })
        .collect();

        Self { entries }
    }

    /// Builds a table from user-supplied entries, preserving their order.
    ///
    /// Keywords are lowercased on insertion. Returns an error if any keyword
    /// is empty (after trimming) or duplicates an earlier one.
    pub fn from_entries(entries: Vec<TopicEntry>) -> Result<Self> {
        let mut normalized: Vec<TopicEntry> = Vec::with_capacity(entries.len());

        for entry in entries {
            let keyword = entry.keyword.trim().to_lowercase();
            if keyword.is_empty() {
                return Err(AskpdfError::TopicTable(
                    "keyword must not be empty".to_string(),
                ))?;
            }
            if normalized.iter().any(|existing| existing.keyword == keyword) {
                return Err(AskpdfError::TopicTable(format!(
                    "duplicate keyword '{}'",
                    keyword
                )))?;
            }
            normalized.push(TopicEntry {
                keyword,
                answer: entry.answer,
            });
        }

        Ok(Self {
            entries: normalized,
        })
    }

    /// Returns the answer of the first entry whose keyword occurs as a
    /// substring of `normalized_question`, or `None` if no entry matches.
    ///
    /// `normalized_question` must already be lowercased; the responder owns
    /// that normalization step.
    pub fn lookup(&self, normalized_question: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| normalized_question.contains(&entry.keyword))
            .map(|entry| entry.answer.as_str())
    }

    /// Iterates entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &TopicEntry> {
        self.entries.iter()
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries. An empty table never matches, so
    /// every question falls through to the default answer.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
