//! # Askpdf Ask Integration Tests
//!
//! File: cli/tests/ask.rs
//!
//! ## Overview
//!
//! End-to-end tests for the default ask action: question via argument,
//! interactive prompting, answer selection, the contextual prefix, and the
//! exact text emitted to stdout. All tests pass `--delay-ms 0` so the suite
//! does not sleep between words; the emitted text is identical with any
//! delay.
//!

mod common;

use common::{askpdf_cmd, BATTERY_ANSWER, CONTEXT_PREFIX, DEFAULT_ANSWER, RANGE_ANSWER};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_question_argument_yields_exact_answer() {
    askpdf_cmd()
        .args(["-d", "0", "Tell me about the battery"])
        .assert()
        .success()
        .stdout(format!("{}\n", BATTERY_ANSWER));
}

#[test]
fn test_unmatched_question_gets_default_answer() {
    askpdf_cmd()
        .args(["-d", "0", "What color is the sky?"])
        .assert()
        .success()
        .stdout(format!("{}\n", DEFAULT_ANSWER));
}

#[test]
fn test_empty_question_gets_default_answer() {
    askpdf_cmd()
        .args(["-d", "0", ""])
        .assert()
        .success()
        .stdout(format!("{}\n", DEFAULT_ANSWER));
}

#[test]
fn test_matching_is_case_insensitive() {
    askpdf_cmd()
        .args(["--delay-ms", "0", "What is the RANGE of the car?"])
        .assert()
        .success()
        .stdout(format!("{}\n", RANGE_ANSWER));
}

#[test]
fn test_first_match_wins_in_table_order() {
    // "range" is declared before "battery" in the built-in table.
    askpdf_cmd()
        .args(["-d", "0", "Compare the battery to the range"])
        .assert()
        .success()
        .stdout(format!("{}\n", RANGE_ANSWER));
}

#[test]
fn test_pdf_question_gets_prefixed_topic_answer() {
    // "pdf" is the earliest matching keyword; the same substring also
    // triggers the contextual prefix.
    askpdf_cmd()
        .args(["-d", "0", "Can you extract info from this PDF document?"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with(CONTEXT_PREFIX)
                .and(predicate::str::contains("I can help you understand PDFs")),
        );
}

#[test]
fn test_upload_question_gets_prefixed_default_answer() {
    // "upload" is a context term but not a table keyword.
    askpdf_cmd()
        .args(["-d", "0", "Please upload it"])
        .assert()
        .success()
        .stdout(format!("{}{}\n", CONTEXT_PREFIX, DEFAULT_ANSWER));
}

#[test]
fn test_multiline_answer_is_emitted_space_joined() {
    // The dimensions answer contains newlines; emission joins all tokens
    // with single spaces on one line.
    askpdf_cmd()
        .args(["-d", "0", "What are the dimensions?"])
        .assert()
        .success()
        .stdout(
            "The LYRIQ's dimensions are: Length: 4,996 mm Width: 1,977 mm Height: 1,623 mm \
             Wheelbase: 3,094 mm Ground Clearance: 151 mm\n",
        );
}

#[test]
fn test_interactive_prompt_reads_one_line() {
    askpdf_cmd()
        .args(["-d", "0"])
        .write_stdin("Tell me about the battery\n")
        .assert()
        .success()
        .stdout(format!("Enter your question: {}\n", BATTERY_ANSWER));
}

#[test]
fn test_interactive_stdin_exhaustion_is_an_error() {
    askpdf_cmd()
        .args(["-d", "0"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no question provided on stdin"));
}

#[test]
fn test_project_config_custom_topics_replace_builtin() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join(".askpdf.toml"),
        r#"
            [responder]
            delay_ms = 0

            [[topics]]
            keyword = "moon"
            answer = "The moon is not covered by this manual."
        "#,
    )
    .expect("write project config");

    // The custom keyword matches.
    askpdf_cmd()
        .current_dir(dir.path())
        .arg("Tell me about the moon")
        .assert()
        .success()
        .stdout("The moon is not covered by this manual.\n");

    // Built-in keywords are gone: a battery question now falls through.
    askpdf_cmd()
        .current_dir(dir.path())
        .arg("Tell me about the battery")
        .assert()
        .success()
        .stdout(format!("{}\n", DEFAULT_ANSWER));
}

#[test]
fn test_invalid_project_config_is_reported() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join(".askpdf.toml"), "not valid toml [").expect("write config");

    askpdf_cmd()
        .current_dir(dir.path())
        .args(["-d", "0", "anything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
