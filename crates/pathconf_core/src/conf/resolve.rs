use tracing::debug;

use crate::conf::{ConfError, Entry, NULL_TEXT, Result, Section};

/// Path segment separator.
pub const SEPARATOR: char = '/';

/// Outcome of comparing the leading segment of a path with an entry name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
	/// Path is exactly the name.
	Exact,
	/// Name matched the first segment; the rest follows the separator.
	Prefix(&'a str),
	Mismatch,
}

/// Compare `name` against the leading segment of `path`.
///
/// Only the separator ends a segment inside `path`; `name` is taken whole.
pub(crate) fn compare_segment<'a>(path: &'a str, name: &str) -> Segment<'a> {
	match path.strip_prefix(name) {
		Some("") => Segment::Exact,
		Some(rest) => match rest.strip_prefix(SEPARATOR) {
			Some(rest) => Segment::Prefix(rest),
			None => Segment::Mismatch,
		},
		None => Segment::Mismatch,
	}
}

/// Resolve `path` to the index of each entry along the way.
///
/// At every level the first entry whose name matches the leading segment
/// wins; there is no backtracking into later siblings.
pub(crate) fn locate(root: &Section, path: &str) -> Option<Vec<usize>> {
	let mut section = root;
	let mut rest = path;
	let mut indices = Vec::new();

	loop {
		if rest.is_empty() {
			debug!(path, "empty name segment");
			return None;
		}

		let hit = section
			.entries()
			.iter()
			.enumerate()
			.find_map(|(idx, entry)| match compare_segment(rest, entry.name()) {
				Segment::Mismatch => None,
				segment => Some((idx, entry, segment)),
			});

		let Some((idx, entry, segment)) = hit else {
			debug!(path, segment = rest, "name not found");
			return None;
		};
		indices.push(idx);

		match segment {
			Segment::Prefix(tail) => {
				let Some(child) = entry.child() else {
					debug!(path, name = entry.name(), "leaf used as section");
					return None;
				};
				section = child;
				rest = tail;
			}
			_ => return Some(indices),
		}
	}
}

impl Section {
	/// Resolve a `/`-separated path to an entry.
	pub fn entry(&self, path: &str) -> Option<&Entry> {
		let indices = locate(self, path)?;
		let (last, parents) = indices.split_last()?;

		let mut section = self;
		for idx in parents {
			section = section.entries().get(*idx)?.child()?;
		}
		section.entries().get(*last)
	}

	/// Resolve a `/`-separated path to a mutable entry.
	pub fn entry_mut(&mut self, path: &str) -> Option<&mut Entry> {
		let indices = locate(self, path)?;
		let (last, parents) = indices.split_last()?;

		let mut section = self;
		for idx in parents {
			section = section.entries_mut().get_mut(*idx)?.child_mut()?;
		}
		section.entries_mut().get_mut(*last)
	}

	/// Resolve a path that must name a section link, returning its child.
	pub fn section(&self, path: &str) -> Option<&Section> {
		self.entry(path)?.child()
	}

	/// [`Section::section`] reporting why the path is not a section.
	pub fn require_section(&self, path: &str) -> Result<&Section> {
		let entry = self.entry(path).ok_or_else(|| ConfError::PathNotFound { path: path.to_owned() })?;
		entry.child().ok_or_else(|| ConfError::NotASection { path: path.to_owned() })
	}

	/// Mutable variant of [`Section::section`].
	pub fn section_mut(&mut self, path: &str) -> Option<&mut Section> {
		self.entry_mut(path)?.child_mut()
	}

	/// Encode the leaf at `path`.
	///
	/// An unbound leaf yields [`NULL_TEXT`] and still succeeds.
	pub fn get(&self, path: &str) -> Result<String> {
		let entry = self.entry(path).ok_or_else(|| ConfError::PathNotFound { path: path.to_owned() })?;
		if entry.is_section() {
			return Err(ConfError::NotALeaf { path: path.to_owned() });
		}
		Ok(entry.encode().unwrap_or_else(|| NULL_TEXT.to_owned()))
	}

	/// Decode `text` into the leaf at `path`. `None` is treated as
	/// [`NULL_TEXT`].
	pub fn set(&mut self, path: &str, text: Option<&str>) -> Result<()> {
		let text = text.unwrap_or(NULL_TEXT);
		let entry = self.entry_mut(path).ok_or_else(|| ConfError::PathNotFound { path: path.to_owned() })?;
		if entry.is_section() {
			return Err(ConfError::NotALeaf { path: path.to_owned() });
		}
		entry.decode(text)
	}
}
