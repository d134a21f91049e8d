//! Script configuration validation.

use crate::models::{ConfigError, ScriptLanguage};
use std::path::Path;

/// Validates script configuration parameters
///
/// For [`ScriptLanguage::Executable`] the path may be followed by whitespace separated
/// program arguments; only the program itself has to exist.
///
/// # Arguments
/// * `script_path` - Path to the script file
/// * `language` - The supported script language
/// * `timeout_ms` - Timeout in milliseconds
///
/// # Returns
/// * `Ok(())` if validation passes
/// * `Err(ConfigError)` if any validation fails
pub fn validate_script_config(
	script_path: &str,
	language: &ScriptLanguage,
	timeout_ms: &u32,
) -> Result<(), ConfigError> {
	let program = match language {
		ScriptLanguage::Executable => script_path.split_whitespace().next().unwrap_or(""),
		_ => script_path,
	};

	let path = Path::new(program);
	if program.is_empty() || !path.exists() {
		return Err(ConfigError::invalid_setting(format!(
			"Script path does not exist: {}",
			script_path
		)));
	}

	let extension = path
		.extension()
		.and_then(|ext| ext.to_str())
		.unwrap_or("");

	let valid_extension = match language {
		ScriptLanguage::Python => extension == "py",
		ScriptLanguage::JavaScript => extension == "js",
		ScriptLanguage::Bash => extension == "sh",
		ScriptLanguage::Executable => true,
	};

	if !valid_extension {
		return Err(ConfigError::invalid_setting(format!(
			"Script file extension does not match specified language {:?}: {}",
			language, script_path
		)));
	}

	if *timeout_ms == 0 {
		return Err(ConfigError::invalid_setting(
			"Timeout must be greater than 0",
		));
	}

	Ok(())
}
