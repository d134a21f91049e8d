//! Trigger script runner.
//!
//! Triggers perform an action for a match and report success through their exit status.
//! They never print a verdict: failures go to stderr and the process exits non-zero.

use std::{
	cell::Cell,
	io::{Read, Write},
	panic::{self, AssertUnwindSafe},
};

use tracing::{error, info};

use crate::{
	models::MatchEnvelope,
	services::script::{
		extract_block_number,
		filter::{at_stage, panic_fault},
		parse_envelope, read_input, require_monitor_match, resolve_chain_match, write_diagnostic,
		ProtocolError, ScriptStage,
	},
};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Side effect a trigger performs for one envelope
#[cfg_attr(test, mockall::automock)]
pub trait NotificationAction {
	fn notify(&self, envelope: &MatchEnvelope) -> Result<(), ProtocolError>;
}

/// Validates the match data and logs a summary of it along with the script arguments
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomNotification;

impl NotificationAction for CustomNotification {
	fn notify(&self, envelope: &MatchEnvelope) -> Result<(), ProtocolError> {
		let monitor_match = require_monitor_match(envelope)?;
		let chain_match = resolve_chain_match(monitor_match)?
			.ok_or_else(|| ProtocolError::missing_field("monitor_match.EVM or monitor_match.Stellar"))?;
		let number = extract_block_number(&chain_match)?;

		info!(
			chain = %chain_match.chain_type(),
			monitor = chain_match.monitor_name().unwrap_or("unknown"),
			network = chain_match.network_slug().unwrap_or("unknown"),
			number = ?number,
			"Received monitor match"
		);

		match envelope.args.as_deref() {
			Some(args) if !args.is_empty() => info!("Args: {:?}", args),
			_ => info!("No args provided"),
		}

		Ok(())
	}
}

/// A trigger script built from an action
pub struct TriggerScript<A> {
	action: A,
}

impl<A: NotificationAction> TriggerScript<A> {
	pub fn new(action: A) -> Self {
		Self { action }
	}

	/// Reads the envelope and performs the action, reporting the stage of the first failure
	pub fn execute<R: Read>(&self, input: R) -> Result<(), (ScriptStage, ProtocolError)> {
		self.execute_tracked(input, &Cell::new(ScriptStage::AwaitingInput))
	}

	fn execute_tracked<R: Read>(
		&self,
		input: R,
		stage: &Cell<ScriptStage>,
	) -> Result<(), (ScriptStage, ProtocolError)> {
		stage.set(ScriptStage::AwaitingInput);
		let text = read_input(input).map_err(at_stage(stage))?;

		stage.set(ScriptStage::Parsing);
		let envelope = parse_envelope(&text).map_err(at_stage(stage))?;

		stage.set(ScriptStage::Notifying);
		self.action.notify(&envelope).map_err(at_stage(stage))
	}

	/// Runs the trigger and returns its process exit status.
	///
	/// On failure a one-line diagnostic is written to `errors`.
	pub fn run<R: Read, E: Write>(&self, input: R, mut errors: E) -> u8 {
		let stage = Cell::new(ScriptStage::AwaitingInput);
		let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.execute_tracked(input, &stage)))
			.unwrap_or_else(|payload| Err((stage.get(), panic_fault(payload))));

		match outcome {
			Ok(()) => EXIT_SUCCESS,
			Err((stage, e)) => {
				error!(stage = %stage, "{}", e);
				if let Err(write_error) = write_diagnostic(&mut errors, &e.to_string()) {
					error!("Failed to write diagnostic: {}", write_error);
				}
				EXIT_FAILURE
			}
		}
	}
}
