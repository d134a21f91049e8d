use serde::{Deserialize, Serialize};

use crate::models::{EVMTransaction, MonitorSummary};

/// Result of a successful monitor match on an EVM chain
///
/// Only the fields scripts read are modelled; everything else the monitor sends
/// (receipt, logs, matched conditions) is ignored on deserialization.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EVMMonitorMatch {
	/// Monitor configuration that triggered the match
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub monitor: Option<MonitorSummary>,

	/// Transaction that triggered the match
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub transaction: Option<EVMTransaction>,

	/// Network the transaction was observed on
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub network_slug: Option<String>,
}
