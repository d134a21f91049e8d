//! Input acquisition and envelope validation.

use serde_json::Value;
use std::io::Read;

use crate::{models::MatchEnvelope, services::script::ProtocolError};

/// Reads the whole input stream.
///
/// Returns [`ProtocolError::EmptyInput`] when no bytes are available, and
/// [`ProtocolError::MalformedPayload`] when the bytes are not UTF-8.
pub fn read_input<R: Read>(mut reader: R) -> Result<String, ProtocolError> {
	let mut buffer = Vec::new();
	reader.read_to_end(&mut buffer)?;

	if buffer.is_empty() {
		return Err(ProtocolError::empty_input("stdin was empty"));
	}

	String::from_utf8(buffer).map_err(|e| ProtocolError::malformed_payload(e.to_string()))
}

/// Parses an envelope from the text read on stdin.
///
/// `monitor_match` and `args` are taken by key and may each be absent; whether that is
/// acceptable is decided by the script through [`require_monitor_match`] and
/// [`require_args`]. A `null` `args` is how the monitor encodes "no arguments" and
/// parses as an empty list.
pub fn parse_envelope(input: &str) -> Result<MatchEnvelope, ProtocolError> {
	if input.is_empty() {
		return Err(ProtocolError::empty_input("stdin was empty"));
	}

	let document: Value =
		serde_json::from_str(input).map_err(|e| ProtocolError::malformed_payload(e.to_string()))?;

	let Value::Object(mut fields) = document else {
		return Err(ProtocolError::malformed_payload(
			"expected a JSON object at the top level",
		));
	};

	let monitor_match = match fields.remove("monitor_match") {
		None | Some(Value::Null) => None,
		Some(value) => Some(value),
	};

	let args = match fields.remove("args") {
		None => None,
		Some(Value::Null) => Some(Vec::new()),
		Some(Value::Array(items)) => Some(
			items
				.into_iter()
				.enumerate()
				.map(|(index, item)| match item {
					Value::String(arg) => Ok(arg),
					other => Err(ProtocolError::decode_error(format!(
						"args[{}] must be a string, got {}",
						index, other
					))),
				})
				.collect::<Result<Vec<_>, _>>()?,
		),
		Some(other) => {
			return Err(ProtocolError::decode_error(format!(
				"args must be an array of strings, got {}",
				other
			)))
		}
	};

	Ok(MatchEnvelope {
		monitor_match,
		args,
	})
}

/// Returns the raw match data, failing when the envelope has none
pub fn require_monitor_match(envelope: &MatchEnvelope) -> Result<&Value, ProtocolError> {
	envelope
		.monitor_match
		.as_ref()
		.ok_or_else(|| ProtocolError::missing_field("monitor_match"))
}

/// Returns the script arguments, failing when the envelope has no `args` key
pub fn require_args(envelope: &MatchEnvelope) -> Result<&[String], ProtocolError> {
	envelope
		.args
		.as_deref()
		.ok_or_else(|| ProtocolError::missing_field("args"))
}
