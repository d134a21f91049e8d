//! Test helper utilities for script configuration
//!
//! - `ScriptConfigBuilder`: Builder for creating test ScriptConfig instances

use crate::models::{ScriptConfig, ScriptLanguage};

/// Builder for creating test ScriptConfig instances
pub struct ScriptConfigBuilder {
	language: ScriptLanguage,
	script_path: String,
	arguments: Option<Vec<String>>,
	timeout_ms: u32,
}

impl Default for ScriptConfigBuilder {
	fn default() -> Self {
		Self {
			language: ScriptLanguage::Bash,
			script_path: "filters/test_filter.sh".to_string(),
			arguments: None,
			timeout_ms: 5000,
		}
	}
}

impl ScriptConfigBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn language(mut self, language: ScriptLanguage) -> Self {
		self.language = language;
		self
	}

	pub fn script_path(mut self, script_path: &str) -> Self {
		self.script_path = script_path.to_string();
		self
	}

	pub fn arguments(mut self, arguments: Vec<&str>) -> Self {
		self.arguments = Some(arguments.into_iter().map(String::from).collect());
		self
	}

	pub fn timeout_ms(mut self, timeout_ms: u32) -> Self {
		self.timeout_ms = timeout_ms;
		self
	}

	pub fn build(self) -> ScriptConfig {
		ScriptConfig {
			language: self.language,
			script_path: self.script_path,
			arguments: self.arguments,
			timeout_ms: self.timeout_ms,
		}
	}
}
