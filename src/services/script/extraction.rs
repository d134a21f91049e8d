//! Chain-family resolution and block number decoding.
//!
//! A `monitor_match` nests its data under exactly one family key. Resolution probes
//! every known family so a payload naming two of them is rejected rather than
//! silently resolved by key order.

use serde_json::{Map, Value};

use crate::{
	models::{BlockChainType, EVMMonitorMatch, MonitorMatch, StellarMonitorMatch},
	services::script::ProtocolError,
};

/// Resolves the chain family of a raw match.
///
/// Returns `Ok(None)` when no known family key is present.
pub fn resolve_chain_match(monitor_match: &Value) -> Result<Option<MonitorMatch>, ProtocolError> {
	let Value::Object(fields) = monitor_match else {
		return Err(ProtocolError::malformed_payload(
			"monitor_match must be a JSON object",
		));
	};

	let present: Vec<BlockChainType> = BlockChainType::ALL
		.into_iter()
		.filter(|family| fields.contains_key(family.match_key()))
		.collect();

	match present.as_slice() {
		[] => Ok(None),
		[family] => decode_family(*family, fields).map(Some),
		families => Err(ProtocolError::malformed_payload(format!(
			"monitor_match carries more than one chain family: {}",
			families
				.iter()
				.map(|family| family.match_key())
				.collect::<Vec<_>>()
				.join(", ")
		))),
	}
}

fn decode_family(
	family: BlockChainType,
	fields: &Map<String, Value>,
) -> Result<MonitorMatch, ProtocolError> {
	let data = fields
		.get(family.match_key())
		.cloned()
		.ok_or_else(|| ProtocolError::missing_field(family.match_key()))?;

	let invalid =
		|e: serde_json::Error| ProtocolError::malformed_payload(format!("{} match: {}", family, e));

	match family {
		BlockChainType::EVM => serde_json::from_value::<EVMMonitorMatch>(data)
			.map(|m| MonitorMatch::EVM(Box::new(m)))
			.map_err(invalid),
		BlockChainType::Stellar => serde_json::from_value::<StellarMonitorMatch>(data)
			.map(|m| MonitorMatch::Stellar(Box::new(m)))
			.map_err(invalid),
	}
}

/// Extracts the block (EVM) or ledger (Stellar) number of a resolved match.
///
/// The enclosing `transaction` or `ledger` record must be present. The number itself
/// may be absent, in which case `Ok(None)` is returned.
pub fn extract_block_number(chain_match: &MonitorMatch) -> Result<Option<u64>, ProtocolError> {
	match chain_match {
		MonitorMatch::EVM(m) => {
			let transaction = m
				.transaction
				.as_ref()
				.ok_or_else(|| ProtocolError::missing_field("monitor_match.EVM.transaction"))?;
			decode_hex_quantity(transaction.block_number.as_ref(), "blockNumber")
		}
		MonitorMatch::Stellar(m) => {
			let ledger = m
				.ledger
				.as_ref()
				.ok_or_else(|| ProtocolError::missing_field("monitor_match.Stellar.ledger"))?;
			decode_decimal_quantity(ledger.sequence.as_ref(), "sequence")
		}
	}
}

/// Decodes a hexadecimal quantity such as `"0x1a2b"`.
///
/// The `0x` prefix is optional. Null and blank strings decode to `None`.
pub fn decode_hex_quantity(value: Option<&Value>, field: &str) -> Result<Option<u64>, ProtocolError> {
	let text = match value {
		None | Some(Value::Null) => return Ok(None),
		Some(Value::String(text)) => text.trim(),
		Some(other) => {
			return Err(ProtocolError::decode_error(format!(
				"{} must be a hexadecimal string, got {}",
				field, other
			)))
		}
	};

	if text.is_empty() {
		return Ok(None);
	}

	let digits = text
		.strip_prefix("0x")
		.or_else(|| text.strip_prefix("0X"))
		.unwrap_or(text);

	if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
		return Err(ProtocolError::decode_error(format!(
			"{} {:?} is not a hexadecimal quantity",
			field, text
		)));
	}

	u64::from_str_radix(digits, 16)
		.map(Some)
		.map_err(|e| ProtocolError::decode_error(format!("{} {:?}: {}", field, text, e)))
}

/// Decodes a non-negative decimal quantity given as a JSON number or a digit string.
///
/// Null and blank strings decode to `None`.
pub fn decode_decimal_quantity(
	value: Option<&Value>,
	field: &str,
) -> Result<Option<u64>, ProtocolError> {
	match value {
		None | Some(Value::Null) => Ok(None),
		Some(Value::Number(number)) => number.as_u64().map(Some).ok_or_else(|| {
			ProtocolError::decode_error(format!(
				"{} {} is not a non-negative integer",
				field, number
			))
		}),
		Some(Value::String(text)) => {
			let text = text.trim();
			if text.is_empty() {
				return Ok(None);
			}
			if !text.bytes().all(|b| b.is_ascii_digit()) {
				return Err(ProtocolError::decode_error(format!(
					"{} {:?} is not a decimal integer",
					field, text
				)));
			}
			text.parse::<u64>()
				.map(Some)
				.map_err(|e| ProtocolError::decode_error(format!("{} {:?}: {}", field, text, e)))
		}
		Some(other) => Err(ProtocolError::decode_error(format!(
			"{} must be an integer, got {}",
			field, other
		))),
	}
}
