use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ledger fields of a Stellar match
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StellarLedger {
	/// Ledger hash
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub hash: Option<String>,

	/// Ledger sequence, sent either as an integer or a decimal string
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sequence: Option<Value>,

	#[serde(
		rename = "ledgerCloseTime",
		default,
		skip_serializing_if = "Option::is_none"
	)]
	pub ledger_close_time: Option<String>,
}
