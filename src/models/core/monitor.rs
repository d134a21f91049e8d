use serde::{Deserialize, Serialize};

/// The part of the monitor configuration echoed back inside a match.
///
/// The monitor sends its whole configuration; scripts only ever need the name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MonitorSummary {
	/// Unique name identifying this monitor
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
}
