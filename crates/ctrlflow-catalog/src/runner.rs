use std::io::Write;

use tracing::{debug, info};

use crate::{catalog::Catalog, error::CatalogError, scenario::Scenario};

pub const BANNER: &str = "C语言switch和for循环完整代码示例\n====================================\n\n";
pub const COMPLETION: &str = "所有示例执行完成！\n";

fn render_scenario(scenario: &Scenario, into: &mut String) {
	debug!(ordinal = scenario.ordinal, scenario = scenario.name, "running scenario");
	into.push_str(scenario.run().as_str());
}

/// The whole run as text: banner, every scenario in order, completion line.
pub fn render_all(catalog: &Catalog) -> String {
	info!(scenarios = catalog.len(), "running catalog");

	let mut transcript = String::from(BANNER);
	for scenario in catalog.iter() {
		render_scenario(scenario, &mut transcript);
	}
	transcript.push_str(COMPLETION);
	transcript
}

/// Only the named scenarios, in the order given, without banner or
/// completion line. Fails before rendering anything if a name is unknown.
pub fn render_selected<S: AsRef<str>>(catalog: &Catalog, names: &[S]) -> Result<String, CatalogError> {
	let selected = names
		.iter()
		.map(|name| catalog.lookup(name.as_ref()))
		.collect::<Result<Vec<_>, _>>()?;

	let mut transcript = String::new();
	for scenario in selected {
		render_scenario(scenario, &mut transcript);
	}
	Ok(transcript)
}

pub fn run_all<W: Write>(catalog: &Catalog, writer: &mut W) -> Result<(), CatalogError> {
	writer.write_all(render_all(catalog).as_bytes())?;
	writer.flush()?;
	Ok(())
}

pub fn run_selected<W: Write, S: AsRef<str>>(
	catalog: &Catalog,
	names: &[S],
	writer: &mut W,
) -> Result<(), CatalogError> {
	let transcript = render_selected(catalog, names)?;
	writer.write_all(transcript.as_bytes())?;
	writer.flush()?;
	Ok(())
}
