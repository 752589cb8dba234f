use serde::Serialize;

use crate::conf::resolve::SEPARATOR;
use crate::conf::{ParseSink, Result, parse_with};

/// Section header as it appeared in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
	/// Root-relative section path.
	pub path: String,
	/// One-based line number.
	pub line: usize,
}

/// One `name = value` line with the section it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
	/// Path of the enclosing section; empty for root-level keys.
	pub section: String,
	/// Entry name on the left of `=`.
	pub key: String,
	/// Value text exactly as read, leading blanks removed.
	pub value: String,
	/// One-based line number.
	pub line: usize,
}

impl Assignment {
	/// `section/key`, or just `key` at the root.
	pub fn path(&self) -> String {
		if self.section.is_empty() {
			self.key.clone()
		} else {
			format!("{}{SEPARATOR}{}", self.section, self.key)
		}
	}
}

/// Schema-less record of a configuration text.
///
/// Uses the same grammar as the tree loader but accepts every section and
/// key, so a file can be checked or inspected without declaring its entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outline {
	/// Headers in file order, repeats included.
	pub headers: Vec<Header>,
	/// Assignments in file order.
	pub assignments: Vec<Assignment>,
	#[serde(skip)]
	current: String,
}

impl Outline {
	/// Record `text`, failing on the first structural error.
	pub fn parse(text: &str) -> Result<Self> {
		Self::parse_bytes(text.as_bytes())
	}

	/// [`Outline::parse`] over raw bytes; text ends at the first NUL.
	pub fn parse_bytes(text: &[u8]) -> Result<Self> {
		let mut outline = Self::default();
		parse_with(text, &mut outline)?;
		outline.current.clear();
		Ok(outline)
	}

	/// Last raw value assigned to `path` (`section/key`, or `key` at the
	/// root).
	pub fn get(&self, path: &str) -> Option<&str> {
		let (section, key) = path.rsplit_once(SEPARATOR).unwrap_or(("", path));
		self.assignments
			.iter()
			.rev()
			.find(|item| item.section == section && item.key == key)
			.map(|item| item.value.as_str())
	}

	/// Distinct section paths in order of first appearance.
	pub fn sections(&self) -> Vec<&str> {
		let mut out: Vec<&str> = Vec::new();
		for header in &self.headers {
			if !out.contains(&header.path.as_str()) {
				out.push(&header.path);
			}
		}
		out
	}

	/// Assignments recorded under `section` (empty for the root).
	pub fn section_assignments<'a>(&'a self, section: &'a str) -> impl Iterator<Item = &'a Assignment> + 'a {
		self.assignments.iter().filter(move |item| item.section == section)
	}
}

impl ParseSink for Outline {
	fn open_section(&mut self, path: &str, line: usize) -> bool {
		self.headers.push(Header { path: path.to_owned(), line });
		self.current = path.to_owned();
		true
	}

	fn assign(&mut self, name: &str, value: &str, line: usize) -> bool {
		self.assignments.push(Assignment {
			section: self.current.clone(),
			key: name.to_owned(),
			value: value.to_owned(),
			line,
		});
		true
	}
}
