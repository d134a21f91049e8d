use crate::properties::strategies::process_output_strategy;
use openzeppelin_monitor_scripts::utils::{process_script_output, ScriptError};
use proptest::{prelude::*, test_runner::Config};
use std::os::unix::process::ExitStatusExt;

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_process_script_output(output in process_output_strategy()) {
		let result = process_script_output(output.clone(), false);

		if !output.status.success() {
			match result {
				Err(ScriptError::ExecutionError(msg)) => {
					prop_assert_eq!(msg, String::from_utf8_lossy(&output.stderr).to_string());
				}
				other => prop_assert!(false, "Expected ExecutionError, got {:?}", other),
			}
		} else {
			let stdout = String::from_utf8_lossy(&output.stdout).to_string();
			let last_line = stdout.lines().last().unwrap_or_default().trim().to_lowercase();
			match last_line.as_str() {
				"true" => prop_assert!(result.unwrap()),
				"false" => prop_assert!(!result.unwrap()),
				_ => prop_assert!(matches!(result, Err(ScriptError::ParseError(_)))),
			}
		}
	}

	#[test]
	fn test_notification_ignores_stdout(output in process_output_strategy()) {
		let result = process_script_output(output.clone(), true);
		prop_assert_eq!(result.is_ok(), output.status.success());
		if let Ok(value) = result {
			prop_assert!(value);
		}
	}

	#[test]
	fn test_script_executor_with_varying_outputs(
		lines in prop::collection::vec("[a-zA-Z0-9 ]{0,20}", 0..10),
		verdict in prop::bool::ANY
	) {
		let mut stdout = lines.join("\n");
		stdout.push('\n');
		stdout.push_str(&verdict.to_string());

		let output = std::process::Output {
			status: std::process::ExitStatus::from_raw(0),
			stdout: stdout.into_bytes(),
			stderr: Vec::new(),
		};

		prop_assert_eq!(process_script_output(output, false).unwrap(), verdict);
	}

	#[test]
	fn test_script_executor_with_error_outputs(
		error_msg in ".*",
		exit_code in 1..255i32
	) {
		let output = std::process::Output {
			status: std::process::ExitStatus::from_raw(exit_code << 8),
			stdout: Vec::new(),
			stderr: error_msg.clone().into_bytes(),
		};

		match process_script_output(output, false) {
			Err(ScriptError::ExecutionError(msg)) => prop_assert_eq!(msg, error_msg),
			other => prop_assert!(false, "Expected ExecutionError, got {:?}", other),
		}
	}

	#[test]
	fn test_script_executor_whitespace_handling(
		spaces_before in " *",
		spaces_after in " *",
		value in prop::bool::ANY
	) {
		let output = std::process::Output {
			status: std::process::ExitStatus::from_raw(0),
			stdout: format!("{}{}{}", spaces_before, value, spaces_after).into_bytes(),
			stderr: Vec::new(),
		};

		prop_assert_eq!(process_script_output(output, false).unwrap(), value);
	}
}
