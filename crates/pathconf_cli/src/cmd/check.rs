use std::path::PathBuf;

use pathconf::conf::{ConfError, Outline, Result};

use crate::cmd::util::{emit_json, read_outline};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Parse a file without a schema and report its sections, or the first
/// malformed line.
pub fn run(args: Args) -> Result<()> {
	let Args { file, json } = args;

	let (outline, failure) = match read_outline(&file) {
		Ok(outline) => (Some(outline), None),
		Err(ConfError::Syntax { line, expected }) => (None, Some((line, expected))),
		Err(err) => return Err(err),
	};

	if json {
		emit_json(&CheckJson {
			path: file.display().to_string(),
			ok: failure.is_none(),
			assignments: outline.as_ref().map_or(0, |item| item.assignments.len()),
			sections: outline.as_ref().map(section_counts).unwrap_or_default(),
			error: failure.map(|(line, expected)| CheckErrorJson { line, expected }),
		});
	} else {
		println!("path: {}", file.display());
		if let Some(outline) = &outline {
			println!("status: ok");
			println!("assignments: {}", outline.assignments.len());
			println!("sections:");
			for section in section_counts(outline) {
				println!("  [{}]: {}", section.path, section.assignments);
			}
		} else if let Some((line, expected)) = failure {
			println!("status: line {line}: expecting {expected}");
		}
	}

	match failure {
		Some((line, expected)) => Err(ConfError::Syntax { line, expected }),
		None => Ok(()),
	}
}

fn section_counts(outline: &Outline) -> Vec<SectionJson> {
	outline
		.sections()
		.into_iter()
		.map(|path| SectionJson {
			path: path.to_owned(),
			assignments: outline.section_assignments(path).count(),
		})
		.collect()
}

#[derive(serde::Serialize)]
struct CheckJson {
	path: String,
	ok: bool,
	assignments: usize,
	sections: Vec<SectionJson>,
	error: Option<CheckErrorJson>,
}

#[derive(serde::Serialize)]
struct SectionJson {
	path: String,
	assignments: usize,
}

#[derive(serde::Serialize)]
struct CheckErrorJson {
	line: usize,
	expected: &'static str,
}

#[cfg(test)]
mod tests;
