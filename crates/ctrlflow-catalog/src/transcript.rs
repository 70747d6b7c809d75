use std::fmt;

/// Prefix of the annotation line that follows an observed segment.
pub const EXPECTED_PREFIX: &str = "输出：";

/// An `输出：` annotation paired with what the scenario actually printed
/// in the segment before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
	pub expected: &'static str,
	pub actual: String,
}

impl Check {
	pub fn matches(&self) -> bool {
		self.expected == self.actual
	}
}

/// Append-only text sink that scenarios print into.
///
/// Printed text is kept verbatim. On top of that the transcript tracks an
/// observed segment: everything printed since the last [`Transcript::label`]
/// or [`Transcript::expect`]. An `expect` call compares that segment with
/// its annotation before printing the annotation line itself.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
	text: String,
	segment_start: usize,
	checks: Vec<Check>,
}

impl Transcript {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn print(&mut self, text: &str) {
		self.text.push_str(text);
	}

	pub fn print_fmt(&mut self, args: fmt::Arguments<'_>) {
		match args.as_str() {
			Some(text) => self.print(text),
			None => self.print(&args.to_string()),
		}
	}

	/// Prints `text` and starts a new observed segment after it.
	pub fn label(&mut self, text: &str) {
		self.print(text);
		self.segment_start = self.text.len();
	}

	/// Records the observed segment against `expected`, then prints the
	/// annotation line.
	pub fn expect(&mut self, expected: &'static str) {
		let actual = self.text[self.segment_start..].trim().to_string();
		self.checks.push(Check { expected, actual });

		self.print("\n");
		self.print(EXPECTED_PREFIX);
		self.print(expected);
		self.print("\n");
		self.segment_start = self.text.len();
	}

	pub fn as_str(&self) -> &str {
		&self.text
	}

	pub fn into_string(self) -> String {
		self.text
	}

	pub fn checks(&self) -> &[Check] {
		&self.checks
	}

	pub fn into_checks(self) -> Vec<Check> {
		self.checks
	}
}

impl fmt::Display for Transcript {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.text)
	}
}

macro_rules! emit {
	($out:expr, $($arg:tt)*) => {
		$out.print_fmt(format_args!($($arg)*))
	};
}

pub(crate) use emit;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn print_is_verbatim() {
		let mut out = Transcript::new();
		out.print("a ");
		emit!(out, "{}^2={} ", 3, 9);
		assert_eq!(out.as_str(), "a 3^2=9 ");
		assert!(out.checks().is_empty());
	}

	#[test]
	fn expect_compares_segment_since_label() {
		let mut out = Transcript::new();
		out.label("使用break：");
		out.print("1 2 ");
		out.expect("1 2");

		assert_eq!(out.as_str(), "使用break：1 2 \n输出：1 2\n");
		assert_eq!(
			out.checks(),
			&[Check {
				expected: "1 2",
				actual: "1 2".to_string(),
			}]
		);
	}

	#[test]
	fn expect_starts_a_new_segment() {
		let mut out = Transcript::new();
		out.print("B");
		out.expect("B");
		out.print("C");
		out.expect("D");

		let checks = out.into_checks();
		assert!(checks[0].matches());
		assert_eq!(checks[1].actual, "C");
		assert!(!checks[1].matches());
	}
}
