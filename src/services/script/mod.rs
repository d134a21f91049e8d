//! Script-side implementation of the monitor script protocol.
//!
//! A script reads one [`MatchEnvelope`](crate::models::MatchEnvelope) from stdin and
//! either reports a verdict (filters) or performs an action and reports success through
//! its exit status (triggers). Every failure degrades: filters still print `false`,
//! triggers exit non-zero with a diagnostic on stderr.

mod error;
mod extraction;
mod filter;
mod input;
mod output;
mod predicate;
mod trigger;

pub use error::ProtocolError;
pub use extraction::{
	decode_decimal_quantity, decode_hex_quantity, extract_block_number, resolve_chain_match,
};
pub use filter::{FilterScript, ScriptStage};
pub use input::{parse_envelope, read_input, require_args, require_monitor_match};
pub use output::{write_diagnostic, VerdictWriter};
pub use predicate::{ArgumentMembership, BlockNumberParity, BlockReference, FilterPredicate};
pub use trigger::{CustomNotification, NotificationAction, TriggerScript, EXIT_FAILURE, EXIT_SUCCESS};

#[cfg(test)]
pub use trigger::MockNotificationAction;
