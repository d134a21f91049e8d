//! Utility modules for common functionality.
//!
//! This module provides various utility functions and types that are used across
//! the crate. Currently includes:
//!
//! - logging: Logging setup for scripts and for the caller
//! - script: Caller-side script execution, validation and output interpretation
//! - tests: Builders for test payloads

pub mod logging;
pub mod script;
pub mod tests;

pub use script::{
	process_script_output, validate_script_config, ScriptError, ScriptExecutor,
	ScriptExecutorFactory,
};
