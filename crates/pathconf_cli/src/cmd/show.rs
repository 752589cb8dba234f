use std::path::PathBuf;

use pathconf::conf::{Outline, Result};

use crate::cmd::util::{emit_json, read_outline};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print every header and assignment of a file, grouped by section.
pub fn run(args: Args) -> Result<()> {
	let Args { file, json } = args;
	let outline = read_outline(&file)?;

	if json {
		emit_json(&ShowJson {
			path: file.display().to_string(),
			outline: &outline,
		});
		return Ok(());
	}

	print_section(&outline, "");
	for section in outline.sections() {
		println!();
		println!("[{section}]");
		print_section(&outline, section);
	}

	Ok(())
}

fn print_section(outline: &Outline, section: &str) {
	for item in outline.section_assignments(section) {
		println!("{} = {}", item.key, item.value);
	}
}

#[derive(serde::Serialize)]
struct ShowJson<'a> {
	path: String,
	#[serde(flatten)]
	outline: &'a Outline,
}
