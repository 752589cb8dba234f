use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::conf::{Result, Section, parse, write_tree};

/// Read the whole file at `path` and apply it to `root`.
///
/// Returns the number of assignments applied. See [`parse`] for the
/// recovery rules.
pub fn load(path: impl AsRef<Path>, root: &mut Section) -> Result<usize> {
	let path = path.as_ref();
	let text = fs::read(path)?;
	debug!(path = %path.display(), bytes = text.len(), "loading configuration");

	let count = parse(&text, root)?;
	debug!(path = %path.display(), count, "configuration loaded");
	Ok(count)
}

/// Create or truncate the file at `path` and write `root` into it.
///
/// Returns the number of leaves written.
pub fn save(path: impl AsRef<Path>, root: &Section) -> Result<usize> {
	let path = path.as_ref();
	let mut out = BufWriter::new(File::create(path)?);
	let count = write_tree(&mut out, root)?;
	out.flush()?;

	debug!(path = %path.display(), count, "configuration saved");
	Ok(count)
}

/// Write `root` to standard output.
pub fn dump(root: &Section) -> Result<usize> {
	let stdout = io::stdout();
	let mut out = stdout.lock();
	let count = write_tree(&mut out, root)?;
	out.flush()?;
	Ok(count)
}
