//! Trigger script notifications.

mod script;

pub use script::ScriptNotifier;
