//! Filter predicates.
//!
//! A predicate splits a filter into two steps: pulling the value it cares about out of
//! an envelope, and deciding on that value. An absent value always yields `false`
//! without reaching [`FilterPredicate::decide`].

use tracing::info;

use crate::{
	models::{BlockChainType, MatchEnvelope},
	services::script::{
		extract_block_number, require_args, require_monitor_match, resolve_chain_match,
		ProtocolError,
	},
};

/// A pure decision over one value extracted from an envelope
pub trait FilterPredicate {
	/// Value the predicate decides on
	type Value;

	/// Pulls the value out of the envelope, `Ok(None)` when it is absent
	fn extract(&self, envelope: &MatchEnvelope) -> Result<Option<Self::Value>, ProtocolError>;

	/// Decides on an extracted value
	fn decide(&self, value: &Self::Value) -> bool;
}

/// Block or ledger number together with the family it was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockReference {
	pub chain: BlockChainType,
	pub number: u64,
}

impl BlockReference {
	fn label(&self) -> &'static str {
		number_label(self.chain)
	}
}

fn number_label(chain: BlockChainType) -> &'static str {
	match chain {
		BlockChainType::EVM => "Block number",
		BlockChainType::Stellar => "Ledger number",
	}
}

/// Admits matches whose block (EVM) or ledger (Stellar) number is even
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockNumberParity {
	chain: Option<BlockChainType>,
}

impl BlockNumberParity {
	/// Parity check over whichever family the match belongs to
	pub fn any_chain() -> Self {
		Self { chain: None }
	}

	/// Parity check that yields no value for matches of other families
	pub fn for_chain(chain: BlockChainType) -> Self {
		Self { chain: Some(chain) }
	}
}

impl FilterPredicate for BlockNumberParity {
	type Value = BlockReference;

	fn extract(&self, envelope: &MatchEnvelope) -> Result<Option<BlockReference>, ProtocolError> {
		let monitor_match = require_monitor_match(envelope)?;
		require_args(envelope)?;

		let Some(chain_match) = resolve_chain_match(monitor_match)? else {
			info!("Monitor match has no EVM or Stellar data");
			return Ok(None);
		};

		let chain = chain_match.chain_type();
		if let Some(expected) = self.chain {
			if expected != chain {
				info!("Monitor match is not an {} match (got {})", expected, chain);
				return Ok(None);
			}
		}

		match extract_block_number(&chain_match)? {
			Some(number) => Ok(Some(BlockReference { chain, number })),
			None => {
				info!("{} is None", number_label(chain));
				Ok(None)
			}
		}
	}

	fn decide(&self, value: &BlockReference) -> bool {
		let is_even = value.number % 2 == 0;
		info!(
			"{}: {}, is even: {}",
			value.label(),
			value.number,
			is_even
		);
		is_even
	}
}

/// Admits matches whose script arguments contain a given token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentMembership {
	token: String,
}

impl ArgumentMembership {
	pub const DEFAULT_TOKEN: &'static str = "--verbose";

	pub fn new(token: impl Into<String>) -> Self {
		Self {
			token: token.into(),
		}
	}

	pub fn token(&self) -> &str {
		&self.token
	}
}

impl Default for ArgumentMembership {
	fn default() -> Self {
		Self::new(Self::DEFAULT_TOKEN)
	}
}

impl FilterPredicate for ArgumentMembership {
	type Value = Vec<String>;

	fn extract(&self, envelope: &MatchEnvelope) -> Result<Option<Vec<String>>, ProtocolError> {
		require_args(envelope).map(|args| Some(args.to_vec()))
	}

	fn decide(&self, args: &Vec<String>) -> bool {
		// Exact, case-sensitive match on whole elements.
		let present = args.iter().any(|arg| arg == &self.token);
		info!("Argument {} present: {}", self.token, present);
		present
	}
}
