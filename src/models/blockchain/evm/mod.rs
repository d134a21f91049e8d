//! Ethereum Virtual Machine (EVM) match data structures.

mod monitor;
mod transaction;

pub use monitor::EVMMonitorMatch;
pub use transaction::EVMTransaction;
