use std::fmt;

use crate::{transcript::Transcript, verify::ScenarioReport};

/// A fixed demonstration: a heading plus a body that prints into a
/// [`Transcript`]. Bodies take no input, so every run prints the same bytes.
#[derive(Clone, Copy)]
pub struct Scenario {
	pub ordinal: usize,
	pub name: &'static str,
	pub title: &'static str,
	action: fn(&mut Transcript),
}

impl Scenario {
	pub const fn new(
		ordinal: usize,
		name: &'static str,
		title: &'static str,
		action: fn(&mut Transcript),
	) -> Self {
		Self {
			ordinal,
			name,
			title,
			action,
		}
	}

	pub fn heading(&self) -> String {
		format!("=== {}. {} ===\n", self.ordinal, self.title)
	}

	pub fn run(&self) -> Transcript {
		let mut out = Transcript::new();
		out.label(&self.heading());
		(self.action)(&mut out);
		out
	}

	pub fn verify(&self) -> ScenarioReport {
		crate::verify::verify_scenario(self)
	}
}

impl fmt::Debug for Scenario {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Scenario")
			.field("ordinal", &self.ordinal)
			.field("name", &self.name)
			.field("title", &self.title)
			.finish_non_exhaustive()
	}
}
