use openzeppelin_monitor_scripts::{
	models::ScriptLanguage,
	services::{filter::ScriptFilter, notification::ScriptNotifier},
	utils::{
		tests::builders::{envelope::EnvelopeBuilder, script::ScriptConfigBuilder},
		ScriptError, ScriptExecutorFactory,
	},
};
use serde_json::json;

use crate::integration::common::script_command;

#[tokio::test]
async fn test_executable_filter_verdicts() {
	let executor = ScriptExecutorFactory::create(
		&ScriptLanguage::Executable,
		&script_command("evm-block-number"),
	);

	let even = EnvelopeBuilder::new().evm_block("0x64").build();
	let odd = EnvelopeBuilder::new().evm_block("0x65").build();

	assert!(executor.execute(&even, &10_000, false).await.unwrap());
	assert!(!executor.execute(&odd, &10_000, false).await.unwrap());
}

#[tokio::test]
async fn test_executable_filter_degrades_to_false() {
	let executor =
		ScriptExecutorFactory::create(&ScriptLanguage::Executable, &script_command("block-number"));
	let envelope = EnvelopeBuilder::new().without_chain().build();

	assert!(!executor.execute(&envelope, &10_000, false).await.unwrap());
}

#[tokio::test]
async fn test_executable_trigger_reports_failure() {
	let executor = ScriptExecutorFactory::create(
		&ScriptLanguage::Executable,
		&script_command("custom-notification"),
	);

	let valid = EnvelopeBuilder::new().stellar_sequence(json!(10)).build();
	assert!(executor.execute(&valid, &10_000, true).await.unwrap());

	let invalid = EnvelopeBuilder::new().without_chain().build();
	match executor.execute(&invalid, &10_000, true).await {
		Err(ScriptError::ExecutionError(stderr)) => assert!(stderr.contains("Missing field")),
		other => panic!("Expected ExecutionError, got {:?}", other),
	}
}

#[tokio::test]
async fn test_script_filter_with_membership_script() {
	let config = ScriptConfigBuilder::new()
		.language(ScriptLanguage::Executable)
		.script_path(&script_command("has-argument"))
		.arguments(vec!["--verbose"])
		.timeout_ms(10_000)
		.build();
	let filter = ScriptFilter::from_config(config).unwrap();

	let monitor_match = EnvelopeBuilder::new().monitor_match();
	assert!(filter.is_filtered(&monitor_match).await);
}

#[tokio::test]
async fn test_script_filter_keeps_odd_blocks() {
	let config = ScriptConfigBuilder::new()
		.language(ScriptLanguage::Executable)
		.script_path(&script_command("evm-block-number"))
		.timeout_ms(10_000)
		.build();
	let filter = ScriptFilter::from_config(config).unwrap();

	let even = EnvelopeBuilder::new().evm_block("0x64").monitor_match();
	let odd = EnvelopeBuilder::new().evm_block("0x65").monitor_match();

	let kept = filter.filter_matches(vec![even, odd.clone()]).await;
	assert_eq!(kept, vec![odd]);
}

#[tokio::test]
async fn test_script_notifier_runs_trigger() {
	let config = ScriptConfigBuilder::new()
		.language(ScriptLanguage::Executable)
		.script_path(&script_command("custom-notification"))
		.arguments(vec!["--channel", "alerts"])
		.timeout_ms(10_000)
		.build();
	let notifier = ScriptNotifier::from_config(config).unwrap();

	let monitor_match = EnvelopeBuilder::new().evm_block("0x64").monitor_match();
	assert!(notifier.script_notify(&monitor_match).await.is_ok());

	let error = notifier.script_notify(&json!({})).await.unwrap_err();
	assert!(error.to_string().contains("Missing field"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_slow_script_times_out() {
	let executor = ScriptExecutorFactory::create(&ScriptLanguage::Bash, "sleep 5; echo true");
	let envelope = EnvelopeBuilder::new().build();

	let result = executor.execute(&envelope, &200, false).await;
	assert!(matches!(result, Err(ScriptError::Timeout(200))));
}
