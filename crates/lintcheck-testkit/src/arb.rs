//! Proptest strategies for generating linter records.
//!
//! # Bounds
//!
//! To keep tests fast, the following bounds are enforced:
//! - Max records per run: 6
//! - Max messages per record: 8
//! - Max message length: 120 code points
//! - Max line number: 2000

use lintcheck_types::{DiagnosticRecord, Message, Severity};
use proptest::prelude::*;

use crate::fixtures::WORKSPACE;

// =============================================================================
// Constants for bounding generated data
// =============================================================================

pub const MAX_RECORDS: usize = 6;
pub const MAX_MESSAGES_PER_RECORD: usize = 8;
pub const MAX_MESSAGE_LEN: usize = 120;
pub const MAX_LINE: u32 = 2000;

// =============================================================================
// Strategies
// =============================================================================

/// Severity as it appears after decoding: one of the three codes or absent.
pub fn arb_severity() -> impl Strategy<Value = Option<Severity>> {
    prop_oneof![
        Just(None),
        Just(Some(Severity::Info)),
        Just(Some(Severity::Warning)),
        Just(Some(Severity::Error)),
    ]
}

/// Message text mixing ASCII, quotes and multi-byte code points.
pub fn arb_message_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 '\"`.-]{0,120}",
        "[a-zé'\"🦀 ]{0,120}",
        proptest::collection::vec(any::<char>(), 0..MAX_MESSAGE_LEN)
            .prop_map(|chars| chars.into_iter().collect()),
    ]
}

fn arb_line() -> impl Strategy<Value = Option<u32>> {
    prop_oneof![Just(None), Just(Some(0)), (1..=MAX_LINE).prop_map(Some)]
}

fn arb_rule_id() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        "[a-z]{2,10}(-[a-z]{2,8}){0,2}".prop_map(Some),
        "(unicorn|import|react)/[a-z-]{3,12}".prop_map(Some),
    ]
}

pub fn arb_message() -> impl Strategy<Value = Message> {
    (
        arb_severity(),
        arb_line(),
        arb_line(),
        arb_message_text(),
        arb_rule_id(),
    )
        .prop_map(|(severity, line, end_line, message, rule_id)| Message {
            severity,
            line,
            end_line,
            message,
            rule_id,
        })
}

/// A record rooted under [`WORKSPACE`].
pub fn arb_record() -> impl Strategy<Value = DiagnosticRecord> {
    (
        "[a-z]{1,8}(/[a-z]{1,8}){0,2}\\.(js|ts|jsx|tsx)",
        proptest::collection::vec(arb_message(), 0..MAX_MESSAGES_PER_RECORD),
        0u32..20,
        0u32..20,
    )
        .prop_map(
            |(rel, messages, warning_count, error_count)| DiagnosticRecord {
                file_path: format!("{WORKSPACE}/{rel}"),
                messages,
                warning_count,
                error_count,
            },
        )
}

pub fn arb_records() -> impl Strategy<Value = Vec<DiagnosticRecord>> {
    proptest::collection::vec(arb_record(), 0..MAX_RECORDS)
}
