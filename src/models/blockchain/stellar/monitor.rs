use serde::{Deserialize, Serialize};

use crate::models::{MonitorSummary, StellarLedger};

/// Result of a successful monitor match on Stellar
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StellarMonitorMatch {
	/// Monitor configuration that triggered the match
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub monitor: Option<MonitorSummary>,

	/// Ledger containing the matched transaction
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub ledger: Option<StellarLedger>,

	/// Network the ledger was observed on
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub network_slug: Option<String>,
}
