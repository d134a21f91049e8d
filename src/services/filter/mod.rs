//! Match filtering through filter scripts.
//!
//! A filter script reporting `true` marks the match as filtered out; every script
//! failure leaves the match in place.

mod script;

pub use script::ScriptFilter;
