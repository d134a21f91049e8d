//! Filter script runner.
//!
//! Drives one envelope through input, parsing, extraction and decision, and always
//! ends by emitting exactly one verdict line. Any failure on the way, a panic
//! included, forces the verdict to `false`.

use std::{
	cell::Cell,
	fmt,
	io::{self, Read, Write},
	panic::{self, AssertUnwindSafe},
};

use tracing::{error, info};

use crate::{
	models::Verdict,
	services::script::{parse_envelope, read_input, FilterPredicate, ProtocolError, VerdictWriter},
};

/// Stage a script run is in, reported alongside failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStage {
	AwaitingInput,
	Parsing,
	Extracting,
	Deciding,
	/// Trigger counterpart of `Deciding`
	Notifying,
	Emitting,
}

impl fmt::Display for ScriptStage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			ScriptStage::AwaitingInput => "awaiting_input",
			ScriptStage::Parsing => "parsing",
			ScriptStage::Extracting => "extracting",
			ScriptStage::Deciding => "deciding",
			ScriptStage::Notifying => "notifying",
			ScriptStage::Emitting => "emitting",
		};
		f.write_str(name)
	}
}

/// Tags an error with the stage the run is currently in
pub(super) fn at_stage(
	stage: &Cell<ScriptStage>,
) -> impl Fn(ProtocolError) -> (ScriptStage, ProtocolError) + '_ {
	move |e| (stage.get(), e)
}

/// Converts a panic payload into a protocol fault
pub(super) fn panic_fault(payload: Box<dyn std::any::Any + Send>) -> ProtocolError {
	let message = if let Some(msg) = payload.downcast_ref::<&str>() {
		(*msg).to_string()
	} else if let Some(msg) = payload.downcast_ref::<String>() {
		msg.clone()
	} else {
		"script panicked".to_string()
	};
	ProtocolError::unexpected_fault(message)
}

/// A filter script built from a predicate
pub struct FilterScript<P> {
	predicate: P,
}

impl<P: FilterPredicate> FilterScript<P> {
	pub fn new(predicate: P) -> Self {
		Self { predicate }
	}

	/// Runs the pipeline up to a verdict, reporting the stage of the first failure
	pub fn evaluate<R: Read>(&self, input: R) -> Result<Verdict, (ScriptStage, ProtocolError)> {
		self.evaluate_tracked(input, &Cell::new(ScriptStage::AwaitingInput))
	}

	fn evaluate_tracked<R: Read>(
		&self,
		input: R,
		stage: &Cell<ScriptStage>,
	) -> Result<Verdict, (ScriptStage, ProtocolError)> {
		stage.set(ScriptStage::AwaitingInput);
		let text = read_input(input).map_err(at_stage(stage))?;

		stage.set(ScriptStage::Parsing);
		let envelope = parse_envelope(&text).map_err(at_stage(stage))?;

		stage.set(ScriptStage::Extracting);
		let value = self.predicate.extract(&envelope).map_err(at_stage(stage))?;

		stage.set(ScriptStage::Deciding);
		Ok(match value {
			Some(value) => Verdict::from(self.predicate.decide(&value)),
			None => Verdict::FALSE,
		})
	}

	/// Evaluates the input, degrading every failure to `false`
	pub fn decide<R: Read>(&self, input: R) -> Verdict {
		let stage = Cell::new(ScriptStage::AwaitingInput);
		let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.evaluate_tracked(input, &stage)))
			.unwrap_or_else(|payload| Err((stage.get(), panic_fault(payload))));

		match outcome {
			Ok(verdict) => verdict,
			Err((stage, e)) => {
				error!(stage = %stage, "{}", e);
				Verdict::FALSE
			}
		}
	}

	/// Evaluates the input and writes the verdict line to `output`.
	///
	/// The only error left is failing to write the verdict itself.
	pub fn run<R: Read, W: Write>(&self, input: R, output: W) -> io::Result<Verdict> {
		let verdict = self.decide(input);
		info!("Filter verdict: {}", verdict);
		VerdictWriter::new(output).emit(verdict).map_err(|e| {
			error!(stage = %ScriptStage::Emitting, "Failed to write verdict: {}", e);
			e
		})?;
		Ok(verdict)
	}
}
