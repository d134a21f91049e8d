//! Stellar match data structures.

mod block;
mod monitor;

pub use block::StellarLedger;
pub use monitor::StellarMonitorMatch;
