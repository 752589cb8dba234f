use std::borrow::Cow;

use tracing::{trace, warn};

use crate::conf::{ConfError, Result, Section};

/// Receiver of the headers and assignments found by [`parse_with`].
pub trait ParseSink {
	/// Called for each `[path]` header. Returning `false` discards every line
	/// up to the next header.
	fn open_section(&mut self, path: &str, line: usize) -> bool;

	/// Called for each `name = value` line of an open section. Returns
	/// whether the assignment was applied.
	fn assign(&mut self, name: &str, value: &str, line: usize) -> bool;
}

/// Parse configuration text into `root`, returning the number of
/// assignments applied.
///
/// Unknown sections and keys, and values rejected by their entry's kind, are
/// logged and skipped. Malformed headers or assignments stop the parse with
/// [`ConfError::Syntax`]; assignments made before that line stay applied.
pub fn parse(text: &[u8], root: &mut Section) -> Result<usize> {
	let mut sink = TreeSink::new(root);
	parse_with(text, &mut sink)
}

/// [`parse`] for in-memory strings.
pub fn parse_str(text: &str, root: &mut Section) -> Result<usize> {
	parse(text.as_bytes(), root)
}

/// Scan `text` line by line, feeding `sink`.
///
/// Text ends at the first NUL byte or at the end of the slice.
pub fn parse_with<S: ParseSink + ?Sized>(text: &[u8], sink: &mut S) -> Result<usize> {
	let mut cursor = Cursor::new(text);
	let mut skip_section = false;
	let mut count = 0_usize;
	let mut line = 0_usize;

	loop {
		line += 1;
		cursor.skip_blanks();

		let Some(byte) = cursor.bump() else {
			break;
		};

		match byte {
			b'\n' => {
				trace!(line, "empty line");
			}
			b'#' => {
				trace!(line, "comment");
				cursor.skip_line();
			}
			b'[' => {
				let path = read_header(&mut cursor, line)?;
				skip_section = !sink.open_section(&path, line);
			}
			_ if skip_section => {
				trace!(line, "skipping");
				cursor.skip_line();
			}
			first => {
				let (name, value) = read_assignment(&mut cursor, first, line)?;
				if sink.assign(&name, &value, line) {
					count += 1;
				}
			}
		}
	}

	Ok(count)
}

fn read_header<'a>(cursor: &mut Cursor<'a>, line: usize) -> Result<Cow<'a, str>> {
	cursor.skip_blanks();

	let start = cursor.pos();
	if !cursor.bump().is_some_and(|byte| byte.is_ascii_alphabetic()) {
		return Err(syntax(line, "alphabetic character"));
	}
	cursor.take_while(|byte| byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'/');
	let path = cursor.slice_from(start);

	cursor.skip_blanks();
	if cursor.bump() != Some(b']') {
		return Err(syntax(line, "]"));
	}

	cursor.skip_blanks();
	match cursor.bump() {
		// A header on the last line needs no trailing newline.
		None | Some(b'\n') => {}
		Some(b'#') => cursor.skip_line(),
		Some(_) => return Err(syntax(line, "end of line")),
	}

	Ok(String::from_utf8_lossy(path))
}

fn read_assignment<'a>(cursor: &mut Cursor<'a>, first: u8, line: usize) -> Result<(Cow<'a, str>, Cow<'a, str>)> {
	if !first.is_ascii_alphabetic() {
		return Err(syntax(line, "alphabetic character"));
	}

	let start = cursor.pos() - 1;
	cursor.take_while(|byte| byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'-' | b'_'));
	let name = cursor.slice_from(start);

	cursor.skip_blanks();
	if cursor.bump() != Some(b'=') {
		return Err(syntax(line, "="));
	}

	cursor.skip_blanks();
	let start = cursor.pos();
	cursor.take_while(|byte| byte != b'\n');
	let value = cursor.slice_from(start);
	cursor.bump();

	Ok((String::from_utf8_lossy(name), String::from_utf8_lossy(value)))
}

fn syntax(line: usize, expected: &'static str) -> ConfError {
	warn!(line, expected, "syntax error");
	ConfError::Syntax { line, expected }
}

/// Applies parsed assignments to a configuration tree.
struct TreeSink<'a> {
	root: &'a mut Section,
	current: String,
}

impl<'a> TreeSink<'a> {
	fn new(root: &'a mut Section) -> Self {
		Self { root, current: String::new() }
	}
}

impl ParseSink for TreeSink<'_> {
	fn open_section(&mut self, path: &str, line: usize) -> bool {
		// Header paths are always resolved from the root.
		if let Err(err) = self.root.require_section(path) {
			warn!(line, section = path, error = %err, "skipping section body");
			return false;
		}
		self.current = path.to_owned();
		true
	}

	fn assign(&mut self, name: &str, value: &str, line: usize) -> bool {
		let section = if self.current.is_empty() {
			&mut *self.root
		} else {
			match self.root.section_mut(&self.current) {
				Some(section) => section,
				None => return false,
			}
		};

		let Some(entry) = section.find_mut(name) else {
			warn!(line, section = %self.current, name, "unknown entry");
			return false;
		};

		match entry.decode(value) {
			Ok(()) => true,
			Err(err) => {
				warn!(line, name, error = %err, "decode error");
				false
			}
		}
	}
}

/// Byte cursor over the text, ending at the first NUL.
struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	fn new(text: &'a [u8]) -> Self {
		let end = text.iter().position(|byte| *byte == 0).unwrap_or(text.len());
		Self { bytes: &text[..end], pos: 0 }
	}

	fn pos(&self) -> usize {
		self.pos
	}

	fn peek(&self) -> Option<u8> {
		self.bytes.get(self.pos).copied()
	}

	fn bump(&mut self) -> Option<u8> {
		let byte = self.peek()?;
		self.pos += 1;
		Some(byte)
	}

	fn take_while(&mut self, mut keep: impl FnMut(u8) -> bool) {
		while self.peek().is_some_and(&mut keep) {
			self.pos += 1;
		}
	}

	/// Spaces, tabs, and carriage returns.
	fn skip_blanks(&mut self) {
		self.take_while(|byte| matches!(byte, b' ' | b'\t' | b'\r'));
	}

	/// Consume through the next newline or to the end of text.
	fn skip_line(&mut self) {
		self.take_while(|byte| byte != b'\n');
		self.bump();
	}

	fn slice_from(&self, start: usize) -> &'a [u8] {
		&self.bytes[start..self.pos]
	}
}
