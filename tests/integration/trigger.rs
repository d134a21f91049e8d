use openzeppelin_monitor_scripts::utils::tests::builders::envelope::EnvelopeBuilder;
use serde_json::json;

use crate::integration::common::{run_script, stderr_of, stdout_of};

#[test]
fn test_custom_notification_success() {
	let input = EnvelopeBuilder::new()
		.evm_block("0x64")
		.monitor_name("usdc_transfers")
		.network_slug("ethereum_mainnet")
		.args(vec!["--channel", "alerts"])
		.to_json();

	let output = run_script(&["custom-notification"], input.as_bytes());

	assert_eq!(output.status.code(), Some(0));
	assert!(stderr_of(&output).is_empty());
	let logs = stdout_of(&output);
	assert!(logs.contains("Received monitor match"));
	assert!(logs.contains("usdc_transfers"));
	assert!(logs.contains("--channel"));
}

#[test]
fn test_custom_notification_stellar_without_args() {
	let input = EnvelopeBuilder::new()
		.stellar_sequence(json!(11))
		.without_args()
		.to_json();

	let output = run_script(&["custom-notification"], input.as_bytes());

	assert_eq!(output.status.code(), Some(0));
	assert!(stdout_of(&output).contains("No args provided"));
}

#[test]
fn test_custom_notification_failures_exit_non_zero() {
	let cases: Vec<(String, &str)> = vec![
		(String::new(), "No input JSON provided"),
		("not json".to_string(), "Invalid JSON input"),
		(r#"{"args": []}"#.to_string(), "Missing field: monitor_match"),
		(
			EnvelopeBuilder::new().without_chain().to_json(),
			"Missing field",
		),
	];

	for (input, expected) in cases {
		let output = run_script(&["custom-notification"], input.as_bytes());
		assert_eq!(output.status.code(), Some(1), "input {:?}", input);
		assert!(
			stderr_of(&output).contains(expected),
			"stderr {:?} lacks {:?}",
			stderr_of(&output),
			expected
		);
	}
}
