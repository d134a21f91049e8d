use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Transaction fields of an EVM match
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EVMTransaction {
	/// Transaction hash
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub hash: Option<String>,

	/// Block number as sent by the node, a `0x`-prefixed quantity.
	///
	/// Kept undecoded so a malformed quantity surfaces as a decode failure
	/// instead of failing the whole payload.
	#[serde(
		rename = "blockNumber",
		default,
		skip_serializing_if = "Option::is_none"
	)]
	pub block_number: Option<Value>,
}
