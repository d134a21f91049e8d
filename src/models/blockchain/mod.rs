//! Blockchain-specific model implementations.
//!
//! This module contains the match payloads produced for each supported chain family.
//! The monitor serializes a match as an externally tagged object keyed by the family
//! name (`{"EVM": {...}}` or `{"Stellar": {...}}`), which is exactly how
//! [`MonitorMatch`] serializes.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod evm;
pub mod stellar;

/// Supported blockchain platform types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BlockChainType {
	/// Ethereum Virtual Machine based chains
	EVM,
	/// Stellar blockchain
	Stellar,
}

impl BlockChainType {
	/// Every supported family, in the order keys are probed in a match payload
	pub const ALL: [BlockChainType; 2] = [BlockChainType::EVM, BlockChainType::Stellar];

	/// Key under which the family's match data is nested in `monitor_match`
	pub fn match_key(&self) -> &'static str {
		match self {
			BlockChainType::EVM => "EVM",
			BlockChainType::Stellar => "Stellar",
		}
	}
}

impl fmt::Display for BlockChainType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.match_key())
	}
}

/// Monitor match results from different blockchain platforms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MonitorMatch {
	/// Matched conditions from EVM chains
	EVM(Box<evm::EVMMonitorMatch>),
	/// Matched conditions from Stellar chains
	Stellar(Box<stellar::StellarMonitorMatch>),
}

impl MonitorMatch {
	/// Chain family this match belongs to
	pub fn chain_type(&self) -> BlockChainType {
		match self {
			MonitorMatch::EVM(_) => BlockChainType::EVM,
			MonitorMatch::Stellar(_) => BlockChainType::Stellar,
		}
	}

	/// Name of the monitor that produced the match, when the payload carries it
	pub fn monitor_name(&self) -> Option<&str> {
		let monitor = match self {
			MonitorMatch::EVM(m) => m.monitor.as_ref(),
			MonitorMatch::Stellar(m) => m.monitor.as_ref(),
		};
		monitor.and_then(|m| m.name.as_deref())
	}

	/// Slug of the network the match was found on, when the payload carries it
	pub fn network_slug(&self) -> Option<&str> {
		match self {
			MonitorMatch::EVM(m) => m.network_slug.as_deref(),
			MonitorMatch::Stellar(m) => m.network_slug.as_deref(),
		}
	}
}
