//! Shared test utilities for the lintcheck workspace.
//!
//! This crate provides:
//! - **arb**: Proptest strategies for linter records and messages
//! - **fixtures**: Sample linter outputs, decoded records and manifests
//!
//! # Example
//!
//! ```rust,ignore
//! use lintcheck_testkit::arb;
//! use proptest::prelude::*;
//!
//! proptest! {
//!     fn every_message_annotates(records in arb::arb_records()) {
//!         // ...
//!     }
//! }
//! ```

pub mod arb;
pub mod fixtures;

// Re-export commonly used items
pub use arb::{arb_message, arb_message_text, arb_record, arb_records, arb_severity};
pub use fixtures::{WORKSPACE, sample_manifests, sample_outputs, sample_records};
