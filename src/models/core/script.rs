use serde::{Deserialize, Serialize};

/// Supported script languages
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum ScriptLanguage {
	/// Run with `python3 -c`
	Python,
	/// Run with `node -e`
	JavaScript,
	/// Run with `sh -c`
	Bash,
	/// A program invoked directly, such as the filters shipped in this crate
	Executable,
}

/// How the caller invokes one script for a match.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScriptConfig {
	/// Language of the script
	pub language: ScriptLanguage,
	/// Path to script file
	pub script_path: String,
	/// Arguments forwarded in the envelope's `args` field
	#[serde(default)]
	pub arguments: Option<Vec<String>>,
	/// Timeout in milliseconds
	pub timeout_ms: u32,
}
