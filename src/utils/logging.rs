//! Logging utilities for scripts and for the caller.
//!
//! All diagnostics go through `tracing`; this module installs the `tracing_subscriber`
//! pipeline that renders them.
//!
//! Scripts share their standard streams with the protocol, so the destination matters:
//! filter scripts log to stderr to keep stdout free for the verdict line, while
//! trigger scripts log to stdout and reserve stderr for failure diagnostics.
//!
//! The filter level is read from `RUST_LOG`, then `LOG_LEVEL`, and defaults to `info`.
use std::env;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Stream that receives log output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
	Stdout,
	Stderr,
}

/// Setup logging to the given standard stream
///
/// ANSI colours are disabled because the stream is usually captured by the monitor
/// and logged verbatim.
pub fn setup_logging(
	target: LogTarget,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	match target {
		LogTarget::Stdout => setup_logging_with_writer(std::io::stdout, false),
		LogTarget::Stderr => setup_logging_with_writer(std::io::stderr, false),
	}
}

/// Setup logging with a custom writer
pub fn setup_logging_with_writer<W>(
	writer: W,
	ansi: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	build_subscriber(writer, ansi).try_init()?;
	Ok(())
}

/// Builds the subscriber without installing it
pub fn build_subscriber<W>(writer: W, ansi: bool) -> impl tracing::Subscriber + Send + Sync
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	tracing_subscriber::registry().with(env_filter()).with(
		fmt::layer()
			.with_writer(writer)
			.with_ansi(ansi)
			.event_format(
				fmt::format()
					.with_level(true)
					.with_target(true)
					.with_thread_ids(false)
					.with_thread_names(false)
					.with_ansi(ansi)
					.compact(),
			)
			.fmt_fields(fmt::format::PrettyFields::new()),
	)
}

/// Builds the level filter from `RUST_LOG`, falling back to `LOG_LEVEL` and then `info`
fn env_filter() -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		let level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
		EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"))
	})
}
