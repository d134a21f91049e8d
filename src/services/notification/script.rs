use serde_json::Value;

use crate::{
	models::{MatchEnvelope, ScriptConfig},
	utils::script::{ScriptError, ScriptExecutor, ScriptExecutorFactory},
};

/// Runs a configured trigger script for monitor matches
pub struct ScriptNotifier {
	config: ScriptConfig,
	executor: Box<dyn ScriptExecutor>,
}

impl ScriptNotifier {
	pub fn new(config: ScriptConfig, executor: Box<dyn ScriptExecutor>) -> Self {
		Self { config, executor }
	}

	/// Creates a Script notifier from a script configuration
	pub fn from_config(config: ScriptConfig) -> Result<Self, ScriptError> {
		let executor = ScriptExecutorFactory::from_config(&config)?;
		Ok(Self::new(config, executor))
	}

	/// Runs the trigger script, which succeeds when it exits with status 0
	pub async fn script_notify(&self, monitor_match: &Value) -> Result<(), anyhow::Error> {
		let envelope = MatchEnvelope::new(monitor_match.clone(), self.config.arguments.clone());

		let result = self
			.executor
			.execute(&envelope, &self.config.timeout_ms, true)
			.await;

		match result {
			Ok(true) => Ok(()),
			Ok(false) => Err(anyhow::anyhow!("Trigger script execution failed")),
			Err(e) => Err(anyhow::anyhow!("Trigger script execution error: {}", e)),
		}
	}
}
