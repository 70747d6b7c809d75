use std::io::Write;

use anyhow::{Context, Result};
use ctrlflow_catalog::{runner, verify::verify_catalog, Catalog};
use tracing::info;

pub fn run<W: Write>(names: &[String], writer: &mut W) -> Result<()> {
	let catalog = Catalog::standard();

	if names.is_empty() {
		runner::run_all(&catalog, writer).context("failed to print scenarios")?;
	} else {
		runner::run_selected(&catalog, names, writer)?;
	}
	Ok(())
}

pub fn list<W: Write>(writer: &mut W) -> Result<()> {
	for scenario in Catalog::standard().iter() {
		writeln!(writer, "{:>2}. {:<22} {}", scenario.ordinal, scenario.name, scenario.title)?;
	}
	Ok(())
}

/// Prints the verification report. Returns whether every annotation matched.
pub fn verify<W: Write>(writer: &mut W) -> Result<bool> {
	let report = verify_catalog(&Catalog::standard());
	writeln!(writer, "{}", report)?;

	let clean = report.is_clean();
	info!(clean, "verification finished");
	Ok(clean)
}
