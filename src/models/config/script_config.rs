//! Script configuration loading and validation.
//!
//! Implements [`ConfigLoader`] for [`ScriptConfig`], so the settings the caller uses to
//! invoke a script can be read from a JSON file.

use std::{fs, path::Path};

use crate::{
	models::{ConfigError, ConfigLoader, ScriptConfig},
	utils::script::validate_script_config,
};

impl ConfigLoader for ScriptConfig {
	/// Load a script configuration from a specific file
	///
	/// Reads and parses a single JSON file, then validates the result.
	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		if !Self::is_json_file(path) {
			return Err(ConfigError::unreadable(path, "expected a .json file"));
		}

		let content = fs::read_to_string(path).map_err(|e| ConfigError::unreadable(path, e))?;
		let config: ScriptConfig =
			serde_json::from_str(&content).map_err(|e| ConfigError::malformed(path, e))?;

		// Validate the config after loading
		config.validate()?;

		Ok(config)
	}

	/// Validate the script configuration
	///
	/// Ensures that:
	/// - The script path exists
	/// - The file extension matches the language
	/// - The timeout is greater than zero
	fn validate(&self) -> Result<(), ConfigError> {
		validate_script_config(&self.script_path, &self.language, &self.timeout_ms)
	}
}
