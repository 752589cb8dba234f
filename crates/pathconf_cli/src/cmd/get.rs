use std::path::PathBuf;

use pathconf::conf::{ConfError, Result};

use crate::cmd::util::{emit_json, read_outline};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	/// `section/key`, or `key` for root-level assignments.
	pub path: String,
	#[arg(long)]
	pub json: bool,
}

/// Print the raw value last assigned to a path.
pub fn run(args: Args) -> Result<()> {
	let Args { file, path, json } = args;
	let outline = read_outline(&file)?;

	let value = outline.get(&path).ok_or_else(|| ConfError::PathNotFound { path: path.clone() })?;

	if json {
		emit_json(&GetJson {
			path: file.display().to_string(),
			key: &path,
			value,
		});
	} else {
		println!("{value}");
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct GetJson<'a> {
	path: String,
	key: &'a str,
	value: &'a str,
}
