//! Checks each scenario's printed output against its `输出：` annotations.

use std::fmt;

use tracing::{debug, warn};

use crate::{catalog::Catalog, scenario::Scenario, transcript::Check};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	Match,
	Mismatch,
	NoExpected,
}

impl Outcome {
	pub fn as_str(&self) -> &'static str {
		match self {
			Outcome::Match => "match",
			Outcome::Mismatch => "mismatch",
			Outcome::NoExpected => "no_expected",
		}
	}
}

impl fmt::Display for Outcome {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone)]
pub struct ScenarioReport {
	pub ordinal: usize,
	pub name: &'static str,
	pub checks: Vec<Check>,
}

impl ScenarioReport {
	pub fn outcome(&self) -> Outcome {
		if self.checks.is_empty() {
			Outcome::NoExpected
		} else if self.checks.iter().all(Check::matches) {
			Outcome::Match
		} else {
			Outcome::Mismatch
		}
	}
}

impl fmt::Display for ScenarioReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let expected = self.checks.iter().map(|c| c.expected).collect::<Vec<_>>().join(" | ");
		let actual = self
			.checks
			.iter()
			.map(|c| c.actual.as_str())
			.collect::<Vec<_>>()
			.join(" | ");

		write!(
			f,
			"Q{}: compare={}; expected={:?}; actual={:?}",
			self.ordinal,
			self.outcome(),
			expected,
			actual
		)
	}
}

#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
	pub scenarios: Vec<ScenarioReport>,
}

impl VerifyReport {
	pub fn count(&self, outcome: Outcome) -> usize {
		self.scenarios.iter().filter(|r| r.outcome() == outcome).count()
	}

	pub fn is_clean(&self) -> bool {
		self.count(Outcome::Mismatch) == 0
	}

	pub fn mismatches(&self) -> impl Iterator<Item = &ScenarioReport> {
		self.scenarios
			.iter()
			.filter(|r| r.outcome() == Outcome::Mismatch)
	}
}

impl fmt::Display for VerifyReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for report in &self.scenarios {
			writeln!(f, "{}", report)?;
		}
		write!(
			f,
			"\n{} matched, {} mismatched, {} without expected output",
			self.count(Outcome::Match),
			self.count(Outcome::Mismatch),
			self.count(Outcome::NoExpected)
		)
	}
}

pub fn verify_scenario(scenario: &Scenario) -> ScenarioReport {
	let checks = scenario.run().into_checks();

	for check in checks.iter().filter(|c| !c.matches()) {
		warn!(
			scenario = scenario.name,
			expected = check.expected,
			actual = %check.actual,
			"output does not match annotation"
		);
	}
	debug!(scenario = scenario.name, checks = checks.len(), "verified scenario");

	ScenarioReport {
		ordinal: scenario.ordinal,
		name: scenario.name,
		checks,
	}
}

pub fn verify_catalog(catalog: &Catalog) -> VerifyReport {
	VerifyReport {
		scenarios: catalog.iter().map(verify_scenario).collect(),
	}
}
