use std::io::Write;

use tracing::{trace, warn};

use crate::conf::resolve::SEPARATOR;
use crate::conf::{NULL_TEXT, Result, Section};

/// Serialize `root` into `out`, returning the number of leaves written.
///
/// Each section writes all of its leaves first, then each child section in
/// declaration order under a root-relative `[a/b]` header.
pub fn write_tree<W: Write + ?Sized>(out: &mut W, root: &Section) -> Result<usize> {
	write_section(out, root, "")
}

/// Serialize `root` into a string.
pub fn render(root: &Section) -> String {
	let mut buf = Vec::new();
	if let Err(err) = write_tree(&mut buf, root) {
		warn!(error = %err, "render failed");
	}
	String::from_utf8_lossy(&buf).into_owned()
}

fn write_section<W: Write + ?Sized>(out: &mut W, section: &Section, branch: &str) -> Result<usize> {
	trace!(branch, entries = section.len(), "writing section");

	let mut count = 0_usize;
	let mut children = Vec::new();

	for entry in section.entries() {
		if let Some(child) = entry.child() {
			children.push((entry.name(), child));
			continue;
		}

		let text = entry.encode();
		writeln!(out, "{} = {}", entry.name(), text.as_deref().unwrap_or(NULL_TEXT))?;
		count += 1;
	}

	for (name, child) in children {
		let path = if branch.is_empty() { name.to_owned() } else { format!("{branch}{SEPARATOR}{name}") };
		writeln!(out)?;
		writeln!(out, "[{path}]")?;
		count += write_section(out, child, &path)?;
	}

	Ok(count)
}
