use pathconf::conf::{ConfError, Result, locate};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// File names, tried in order.
	#[arg(required = true)]
	pub names: Vec<String>,
	/// Search directories, tried in order for each name. `~` is the home
	/// directory.
	#[arg(long = "dir", required = true)]
	pub dirs: Vec<String>,
	#[arg(long)]
	pub json: bool,
}

/// Print the first existing file over the search directories.
pub fn run(args: Args) -> Result<()> {
	let Args { names, dirs, json } = args;

	let found = locate(&dirs, &names).ok_or_else(|| ConfError::PathNotFound { path: names.join(", ") })?;

	if json {
		emit_json(&LocateJson {
			path: found.display().to_string(),
		});
	} else {
		println!("{}", found.display());
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct LocateJson {
	path: String,
}
