use serde_json::Value;

use crate::{
	models::{MatchEnvelope, ScriptConfig},
	utils::script::{ScriptError, ScriptExecutor, ScriptExecutorFactory},
};

/// Runs one configured filter script against monitor matches
pub struct ScriptFilter {
	config: ScriptConfig,
	executor: Box<dyn ScriptExecutor>,
}

impl ScriptFilter {
	pub fn new(config: ScriptConfig, executor: Box<dyn ScriptExecutor>) -> Self {
		Self { config, executor }
	}

	/// Creates a filter for a configured script, loading its source
	pub fn from_config(config: ScriptConfig) -> Result<Self, ScriptError> {
		let executor = ScriptExecutorFactory::from_config(&config)?;
		Ok(Self::new(config, executor))
	}

	/// Runs the script and returns its verdict
	pub async fn evaluate(&self, monitor_match: &Value) -> Result<bool, ScriptError> {
		let envelope = MatchEnvelope::new(monitor_match.clone(), self.config.arguments.clone());
		self.executor
			.execute(&envelope, &self.config.timeout_ms, false)
			.await
	}

	/// Whether the match should be dropped.
	///
	/// Script errors are logged and never drop a match.
	pub async fn is_filtered(&self, monitor_match: &Value) -> bool {
		match self.evaluate(monitor_match).await {
			Ok(verdict) => verdict,
			Err(e) => {
				tracing::warn!(
					script = %self.config.script_path,
					"Filter script failed, keeping match: {}",
					e
				);
				false
			}
		}
	}

	/// Returns the matches that are not filtered out, in their original order
	pub async fn filter_matches(&self, matches: Vec<Value>) -> Vec<Value> {
		let mut kept = Vec::with_capacity(matches.len());
		for monitor_match in matches {
			if !self.is_filtered(&monitor_match).await {
				kept.push(monitor_match);
			}
		}
		kept
	}
}
