use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The payload written to a script's standard input for one match.
///
/// Serializes as `{"monitor_match": ..., "args": [...] | null}`. The monitor sends
/// `null` for `args` when the script has no configured arguments.
///
/// `monitor_match` is kept as raw JSON so the chain family can be resolved by key
/// presence, with absent or unknown families degrading to "no value" rather than a
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MatchEnvelope {
	/// Match data keyed by chain family
	pub monitor_match: Option<Value>,

	/// Arguments configured alongside the script
	pub args: Option<Vec<String>>,
}

impl MatchEnvelope {
	/// Creates an envelope for a single invocation
	pub fn new(monitor_match: Value, args: Option<Vec<String>>) -> Self {
		Self {
			monitor_match: Some(monitor_match),
			args,
		}
	}

	/// Renders the envelope exactly as it is written to a script's stdin
	pub fn to_json(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string(self)
	}
}
