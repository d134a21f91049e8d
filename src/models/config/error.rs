//! Configuration error types.

use log::error;
use std::{
	error::Error,
	fmt,
	path::{Path, PathBuf},
};

/// Errors raised while loading or checking a script configuration
#[derive(Debug)]
pub enum ConfigError {
	/// A setting the caller cannot run with, such as a zero timeout
	InvalidSetting(String),

	/// The file is not a script configuration
	Malformed { path: PathBuf, reason: String },

	/// The file could not be read
	Unreadable { path: PathBuf, reason: String },
}

impl ConfigError {
	fn format_message(&self) -> String {
		match self {
			Self::InvalidSetting(msg) => format!("Invalid script setting: {}", msg),
			Self::Malformed { path, reason } => {
				format!("Malformed script config {}: {}", path.display(), reason)
			}
			Self::Unreadable { path, reason } => {
				format!("Cannot read script config {}: {}", path.display(), reason)
			}
		}
	}

	fn logged(self) -> Self {
		error!("{}", self.format_message());
		self
	}

	/// Create an invalid setting error and log it
	pub fn invalid_setting(msg: impl Into<String>) -> Self {
		Self::InvalidSetting(msg.into()).logged()
	}

	/// Create a malformed file error and log it
	pub fn malformed(path: &Path, reason: impl fmt::Display) -> Self {
		Self::Malformed {
			path: path.to_path_buf(),
			reason: reason.to_string(),
		}
		.logged()
	}

	/// Create an unreadable file error and log it
	pub fn unreadable(path: &Path, reason: impl fmt::Display) -> Self {
		Self::Unreadable {
			path: path.to_path_buf(),
			reason: reason.to_string(),
		}
		.logged()
	}
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for ConfigError {}
