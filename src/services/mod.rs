//! Core services.
//!
//! - `script`: the script side of the protocol, run inside the shipped filter and
//!   trigger binaries
//! - `filter`: caller side, suppresses matches through filter scripts
//! - `notification`: caller side, runs trigger scripts for a match

pub mod filter;
pub mod notification;
pub mod script;
