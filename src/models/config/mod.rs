//! Configuration loading and validation.
//!
//! This module provides the [`ConfigLoader`] trait used to read caller-side script
//! configuration from JSON files.

use std::path::Path;

mod error;
mod script_config;

pub use error::ConfigError;

/// Common interface for loading configuration files
pub trait ConfigLoader: Sized {
	/// Load a configuration from a specific file and validate it
	fn load_from_path(path: &Path) -> Result<Self, ConfigError>;

	/// Validate the configuration
	fn validate(&self) -> Result<(), ConfigError>;

	/// Check if a file is a JSON file based on extension
	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.to_string_lossy().to_lowercase() == "json")
			.unwrap_or(false)
	}
}
