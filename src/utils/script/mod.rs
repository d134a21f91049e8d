//! Caller-side script invocation.
//!
//! Spawns one script process per match, writes the envelope to its stdin and
//! interprets the exit status and last stdout line.

mod error;
mod executor;
mod factory;
mod validation;

pub use error::ScriptError;
pub use executor::{
	process_script_output, BashScriptExecutor, ExecutableScriptExecutor,
	JavaScriptScriptExecutor, PythonScriptExecutor, ScriptExecutor,
};
pub use factory::ScriptExecutorFactory;
pub use validation::validate_script_config;
