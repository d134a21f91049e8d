//! Script executor factory.
//!
//! Creates script executors based on the script language.

use crate::{
	models::{ScriptConfig, ScriptLanguage},
	utils::script::{
		error::ScriptError,
		executor::{
			BashScriptExecutor, ExecutableScriptExecutor, JavaScriptScriptExecutor,
			PythonScriptExecutor, ScriptExecutor,
		},
	},
};

/// Factory for creating script executors based on the script language.
pub struct ScriptExecutorFactory;

impl ScriptExecutorFactory {
	/// Creates a new script executor for the specified language.
	///
	/// # Arguments
	///
	/// * `language` - The programming language of the script
	/// * `script` - The script source, or for [`ScriptLanguage::Executable`] the program
	///   path followed by whitespace separated program arguments
	///
	/// # Returns
	///
	/// Returns a boxed [`ScriptExecutor`] implementation for the specified language.
	pub fn create(language: &ScriptLanguage, script: &str) -> Box<dyn ScriptExecutor> {
		match language {
			ScriptLanguage::Python => Box::new(PythonScriptExecutor {
				script_content: script.to_string(),
			}),
			ScriptLanguage::JavaScript => Box::new(JavaScriptScriptExecutor {
				script_content: script.to_string(),
			}),
			ScriptLanguage::Bash => Box::new(BashScriptExecutor {
				script_content: script.to_string(),
			}),
			ScriptLanguage::Executable => {
				let mut parts = script.split_whitespace().map(str::to_string);
				Box::new(ExecutableScriptExecutor {
					program: parts.next().unwrap_or_default(),
					program_args: parts.collect(),
				})
			}
		}
	}

	/// Creates an executor for a configured script.
	///
	/// Interpreted scripts are read from `script_path` once, up front. For
	/// [`ScriptLanguage::Executable`] the path itself is the command line.
	pub fn from_config(config: &ScriptConfig) -> Result<Box<dyn ScriptExecutor>, ScriptError> {
		let script = match config.language {
			ScriptLanguage::Executable => config.script_path.clone(),
			_ => std::fs::read_to_string(&config.script_path).map_err(|e| {
				ScriptError::not_found(format!("{}: {}", config.script_path, e))
			})?,
		};
		Ok(Self::create(&config.language, &script))
	}
}
