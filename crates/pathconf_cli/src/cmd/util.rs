use std::fs;
use std::path::Path;

use pathconf::conf::{Outline, Result};
use serde::Serialize;
use tracing::debug;

/// Read a configuration file into a schema-less outline.
pub(crate) fn read_outline(path: &Path) -> Result<Outline> {
	let bytes = fs::read(path)?;
	debug!(path = %path.display(), bytes = bytes.len(), "read configuration file");
	Outline::parse_bytes(&bytes)
}

/// Print `payload` as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: json encode failed: {err}"),
	}
}
