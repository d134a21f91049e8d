//! Domain models for the monitor script protocol.
//!
//! This module contains all the data structures exchanged between the monitor and the
//! scripts it spawns:
//!
//! - `blockchain`: Chain-family specific match data (EVM, Stellar)
//! - `config`: Caller-side script configuration loading and validation
//! - `core`: The match envelope, the verdict and script settings

mod blockchain;
mod config;
mod core;

// Re-export blockchain types
pub use blockchain::{BlockChainType, MonitorMatch};

pub use blockchain::evm::{EVMMonitorMatch, EVMTransaction};

pub use blockchain::stellar::{StellarLedger, StellarMonitorMatch};

// Re-export core types
pub use core::{
	InvalidVerdict, MatchEnvelope, MonitorSummary, ScriptConfig, ScriptLanguage, Verdict,
};

// Re-export config types
pub use config::{ConfigError, ConfigLoader};
