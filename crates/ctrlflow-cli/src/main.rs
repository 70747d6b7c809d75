use clap::{Parser, Subcommand};
use ctrlflow_cli::{commands, logging};

#[derive(Parser)]
#[command(name = "ctrlflow")]
#[command(about = "Prints the switch and for-loop demonstration scenarios")]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
	/// Print scenarios; all of them, with banner, when no name is given
	Run {
		#[arg(help = "Scenario names, printed in the given order")]
		names: Vec<String>,
	},
	/// List scenario ordinals, names and titles
	List,
	/// Compare every scenario's output with its expected-output annotations
	Verify,
}

fn main() {
	logging::init();
	let cli = Cli::parse();

	let mut stdout = std::io::stdout().lock();
	let result = match cli.command.unwrap_or(Commands::Run { names: vec![] }) {
		Commands::Run { names } => commands::run(&names, &mut stdout),
		Commands::List => commands::list(&mut stdout),
		Commands::Verify => commands::verify(&mut stdout).and_then(|clean| {
			if clean {
				Ok(())
			} else {
				Err(anyhow::anyhow!("verification failed"))
			}
		}),
	};

	if let Err(e) = result {
		eprintln!("Error: {}", e);
		std::process::exit(1);
	}
}
