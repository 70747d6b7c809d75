use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("unknown scenario '{0}'")]
	UnknownScenario(String),

	#[error("duplicate scenario name '{0}'")]
	DuplicateName(&'static str),

	#[error("scenario '{name}' declares ordinal {ordinal} but sits at position {position}")]
	MisplacedOrdinal {
		name: &'static str,
		ordinal: usize,
		position: usize,
	},

	#[error("failed to write transcript: {0}")]
	Io(#[from] std::io::Error),
}
