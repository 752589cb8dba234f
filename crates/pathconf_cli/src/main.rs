#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "PATHCONF_LOG";

#[derive(Parser)]
#[command(name = "pathconf", about = "Configuration file inspection tools")]
struct Cli {
	/// Log parser and lookup decisions at debug level.
	#[arg(short, long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Check a file against the grammar.
	Check(cmd::check::Args),
	/// Print every section and assignment of a file.
	Show(cmd::show::Args),
	/// Print the value last assigned to a path.
	Get(cmd::get::Args),
	/// Find the first existing file over search directories.
	Locate(cmd::locate::Args),
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> pathconf::conf::Result<()> {
	match command {
		Commands::Check(args) => cmd::check::run(args),
		Commands::Show(args) => cmd::show::run(args),
		Commands::Get(args) => cmd::get::run(args),
		Commands::Locate(args) => cmd::locate::run(args),
	}
}

fn init_logging(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
	};

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.without_time()
		.try_init();
}
