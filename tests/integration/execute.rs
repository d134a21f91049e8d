use openzeppelin_monitor_scripts::utils::tests::builders::envelope::EnvelopeBuilder;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

use crate::integration::common::{run_script, script_command, stdout_of};

fn json_file(content: &str) -> NamedTempFile {
	let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
	file.write_all(content.as_bytes()).unwrap();
	file
}

fn config_file(subcommand: &str, timeout_ms: u32) -> NamedTempFile {
	json_file(
		&json!({
			"language": "Executable",
			"script_path": script_command(subcommand),
			"arguments": ["--verbose"],
			"timeout_ms": timeout_ms
		})
		.to_string(),
	)
}

fn execute(
	config: &NamedTempFile,
	monitor_match: &NamedTempFile,
	extra: &[&str],
) -> std::process::Output {
	let config_path = config.path().to_string_lossy().into_owned();
	let match_path = monitor_match.path().to_string_lossy().into_owned();

	let mut args = vec![
		"execute",
		"--config",
		config_path.as_str(),
		"--match",
		match_path.as_str(),
	];
	args.extend_from_slice(extra);
	run_script(&args, b"")
}

#[test]
fn test_execute_filter_prints_verdict() {
	let config = config_file("block-number", 10_000);
	let even = json_file(&EnvelopeBuilder::new().evm_block("0x64").monitor_match().to_string());
	let odd = json_file(&EnvelopeBuilder::new().evm_block("0x65").monitor_match().to_string());

	let output = execute(&config, &even, &[]);
	assert!(output.status.success());
	assert_eq!(stdout_of(&output), "true\n");

	let output = execute(&config, &odd, &[]);
	assert!(output.status.success());
	assert_eq!(stdout_of(&output), "false\n");
}

#[test]
fn test_execute_notification() {
	let config = config_file("custom-notification", 10_000);
	let monitor_match =
		json_file(&EnvelopeBuilder::new().stellar_sequence(json!(10)).monitor_match().to_string());

	let output = execute(&config, &monitor_match, &["--notification"]);
	assert!(output.status.success());
	assert_eq!(stdout_of(&output), "Trigger script completed\n");

	let empty_match = json_file("{}");
	let output = execute(&config, &empty_match, &["--notification"]);
	assert!(!output.status.success());
}

#[test]
fn test_execute_rejects_invalid_config() {
	let config = config_file("block-number", 0);
	let monitor_match = json_file(&EnvelopeBuilder::new().monitor_match().to_string());

	let output = execute(&config, &monitor_match, &[]);
	assert!(!output.status.success());
	assert!(stdout_of(&output).is_empty());
}
