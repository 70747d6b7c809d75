use indexmap::IndexMap;

use crate::{error::CatalogError, scenario::Scenario, scenarios};

/// Ordered scenarios keyed by name. Iteration order is declaration order.
#[derive(Debug, Clone)]
pub struct Catalog {
	scenarios: IndexMap<&'static str, Scenario>,
}

impl Catalog {
	/// Builds a catalog, rejecting repeated names and ordinals that do not
	/// match their 1-based position.
	pub fn new(scenarios: impl IntoIterator<Item = Scenario>) -> Result<Self, CatalogError> {
		let mut map = IndexMap::new();

		for scenario in scenarios {
			let position = map.len() + 1;
			if scenario.ordinal != position {
				return Err(CatalogError::MisplacedOrdinal {
					name: scenario.name,
					ordinal: scenario.ordinal,
					position,
				});
			}
			if map.contains_key(scenario.name) {
				return Err(CatalogError::DuplicateName(scenario.name));
			}
			map.insert(scenario.name, scenario);
		}

		Ok(Self { scenarios: map })
	}

	/// The twenty built-in scenarios.
	pub fn standard() -> Self {
		Self {
			scenarios: scenarios::ALL.iter().map(|s| (s.name, *s)).collect(),
		}
	}

	pub fn len(&self) -> usize {
		self.scenarios.len()
	}

	pub fn is_empty(&self) -> bool {
		self.scenarios.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
		self.scenarios.values()
	}

	pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.scenarios.keys().copied()
	}

	pub fn get(&self, name: &str) -> Option<&Scenario> {
		self.scenarios.get(name)
	}

	pub fn lookup(&self, name: &str) -> Result<&Scenario, CatalogError> {
		self.get(name)
			.ok_or_else(|| CatalogError::UnknownScenario(name.to_string()))
	}
}

impl Default for Catalog {
	fn default() -> Self {
		Self::standard()
	}
}
