//! Verdict and diagnostic emission.

use std::io::{self, Write};

use crate::models::Verdict;

/// Writes the single verdict line a filter reports on stdout.
///
/// Consumes itself so a run cannot emit twice.
pub struct VerdictWriter<W: Write> {
	inner: W,
}

impl<W: Write> VerdictWriter<W> {
	pub fn new(inner: W) -> Self {
		Self { inner }
	}

	/// Writes `true` or `false` followed by a newline, then flushes
	pub fn emit(mut self, verdict: Verdict) -> io::Result<()> {
		writeln!(self.inner, "{}", verdict)?;
		self.inner.flush()
	}
}

/// Writes a one-line diagnostic, used by triggers to report failures on stderr
pub fn write_diagnostic<W: Write>(stream: &mut W, message: &str) -> io::Result<()> {
	writeln!(stream, "{}", message)?;
	stream.flush()
}
