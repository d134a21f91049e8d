use std::{error::Error, fmt, str::FromStr};

/// The boolean decision a filter script reports on its last stdout line.
///
/// The default verdict is `false`, which is also the verdict forced on every failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Verdict(bool);

impl Verdict {
	pub const TRUE: Verdict = Verdict(true);
	pub const FALSE: Verdict = Verdict(false);

	/// The literal token written on the terminal line
	pub fn as_str(&self) -> &'static str {
		if self.0 {
			"true"
		} else {
			"false"
		}
	}
}

impl From<bool> for Verdict {
	fn from(value: bool) -> Self {
		Self(value)
	}
}

impl From<Verdict> for bool {
	fn from(verdict: Verdict) -> Self {
		verdict.0
	}
}

impl fmt::Display for Verdict {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Returned when a line is not a boolean token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidVerdict(pub String);

impl fmt::Display for InvalidVerdict {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "'{}' is not a valid boolean", self.0)
	}
}

impl Error for InvalidVerdict {}

impl FromStr for Verdict {
	type Err = InvalidVerdict;

	/// Parses a verdict line. Surrounding whitespace is ignored and the token is
	/// matched case-insensitively, so `True` printed by older scripts still parses.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"true" => Ok(Verdict::TRUE),
			"false" => Ok(Verdict::FALSE),
			_ => Err(InvalidVerdict(s.to_string())),
		}
	}
}
