//! Protocol error types.
//!
//! Every error a script can hit while handling an envelope. None of them escape a
//! script run: filters turn them into a `false` verdict and triggers into a non-zero
//! exit status, so constructors do not log; the runner reports each one once.

use std::{error::Error, fmt};

/// Represents possible failures while handling one envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
	/// No bytes were available on stdin
	EmptyInput(String),
	/// Input is not a JSON document of the expected shape
	MalformedPayload(String),
	/// A required key is absent
	MissingField(String),
	/// A present field cannot be converted to a number
	DecodeError(String),
	/// Any other fault, including panics and I/O failures
	UnexpectedFault(String),
}

impl ProtocolError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			ProtocolError::EmptyInput(msg) => format!("No input JSON provided: {}", msg),
			ProtocolError::MalformedPayload(msg) => format!("Invalid JSON input: {}", msg),
			ProtocolError::MissingField(msg) => format!("Missing field: {}", msg),
			ProtocolError::DecodeError(msg) => format!("Decode error: {}", msg),
			ProtocolError::UnexpectedFault(msg) => format!("Error processing input: {}", msg),
		}
	}

	pub fn empty_input(msg: impl Into<String>) -> Self {
		ProtocolError::EmptyInput(msg.into())
	}

	pub fn malformed_payload(msg: impl Into<String>) -> Self {
		ProtocolError::MalformedPayload(msg.into())
	}

	pub fn missing_field(msg: impl Into<String>) -> Self {
		ProtocolError::MissingField(msg.into())
	}

	pub fn decode_error(msg: impl Into<String>) -> Self {
		ProtocolError::DecodeError(msg.into())
	}

	pub fn unexpected_fault(msg: impl Into<String>) -> Self {
		ProtocolError::UnexpectedFault(msg.into())
	}
}

impl fmt::Display for ProtocolError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for ProtocolError {}

impl From<std::io::Error> for ProtocolError {
	fn from(err: std::io::Error) -> Self {
		Self::unexpected_fault(err.to_string())
	}
}
