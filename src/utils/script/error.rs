//! Script error types and handling.
//!
//! Provides error types for invoking scripts from the monitor side,
//! including spawn failures, timeouts and unreadable output.

use log::error;
use std::{error::Error, fmt};

/// Represents possible errors while invoking a script
#[derive(Debug, Clone)]
pub enum ScriptError {
	/// When a requested script cannot be found
	NotFound(String),
	/// When the script exits unsuccessfully, carrying its stderr verbatim
	ExecutionError(String),
	/// When the script output is not a verdict
	ParseError(String),
	/// When the script does not finish within its timeout (milliseconds)
	Timeout(u32),
	/// When a system error occurs
	SystemError(String),
}

impl ScriptError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			ScriptError::NotFound(msg) => format!("Script not found: {}", msg),
			ScriptError::ExecutionError(msg) => format!("Script execution error: {}", msg),
			ScriptError::ParseError(msg) => format!("Script parse error: {}", msg),
			ScriptError::Timeout(ms) => format!("Script execution timed out after {}ms", ms),
			ScriptError::SystemError(msg) => format!("System error: {}", msg),
		}
	}

	/// Logs the error once, at the point it is raised
	fn logged(self) -> Self {
		error!("{}", self.format_message());
		self
	}

	pub fn not_found(msg: impl Into<String>) -> Self {
		ScriptError::NotFound(msg.into()).logged()
	}

	pub fn execution_error(msg: impl Into<String>) -> Self {
		ScriptError::ExecutionError(msg.into()).logged()
	}

	pub fn parse_error(msg: impl Into<String>) -> Self {
		ScriptError::ParseError(msg.into()).logged()
	}

	pub fn timeout(timeout_ms: u32) -> Self {
		ScriptError::Timeout(timeout_ms).logged()
	}

	pub fn system_error(msg: impl Into<String>) -> Self {
		ScriptError::SystemError(msg.into()).logged()
	}
}

impl fmt::Display for ScriptError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for ScriptError {}
