use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout carries only the transcript. The level comes
/// from `RUST_LOG` and defaults to `warn`.
pub fn init() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
