//! Core domain models for the monitor script protocol.
//!
//! This module contains the fundamental data structures that represent:
//! - Envelopes: The payload handed to a script for one match
//! - Verdicts: The boolean decision a filter script reports back
//! - Scripts: Language and invocation settings used by the caller

mod envelope;
mod monitor;
mod script;
mod verdict;

pub use envelope::MatchEnvelope;
pub use monitor::MonitorSummary;
pub use script::{ScriptConfig, ScriptLanguage};
pub use verdict::{InvalidVerdict, Verdict};
