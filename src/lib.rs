//! Filter and trigger scripts for the OpenZeppelin Monitor.
//!
//! The monitor hands each match to a script as a JSON envelope on stdin. Filter
//! scripts answer with a `true`/`false` verdict on their last stdout line; trigger
//! scripts perform an action and report through their exit status.
//!
//! # Architecture
//! - `models`: envelope, match payloads, verdicts and script configuration
//! - `services::script`: the script side, as run by the `openzeppelin-monitor-script` binary
//! - `services::filter` / `services::notification`: the caller side, invoking scripts
//! - `utils`: logging setup, script executors and validation

pub mod models;
pub mod services;
pub mod utils;
