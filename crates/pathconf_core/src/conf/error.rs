use thiserror::Error;

use crate::conf::Kind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ConfError>;

/// Errors produced while loading, saving, and addressing configuration trees.
#[derive(Debug, Error)]
pub enum ConfError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Malformed header or assignment; parsing stopped at this line.
	#[error("line {line}: expecting {expected}")]
	Syntax {
		/// One-based line number of the offending line.
		line: usize,
		/// What the scanner required at the failure point.
		expected: &'static str,
	},
	/// Path did not resolve to any entry.
	#[error("path not found: {path}")]
	PathNotFound {
		/// Path as given by the caller.
		path: String,
	},
	/// Path resolved to a leaf where a section was required.
	#[error("not a section: {path}")]
	NotASection {
		/// Path as given by the caller.
		path: String,
	},
	/// Path resolved to a section where a leaf was required.
	#[error("not a leaf: {path}")]
	NotALeaf {
		/// Path as given by the caller.
		path: String,
	},
	/// Text could not be converted for the entry's kind.
	#[error("cannot decode {text:?} as {}", kind.name())]
	Decode {
		/// Kind the text was decoded against.
		kind: Kind,
		/// Rejected text.
		text: String,
	},
	/// Kind is registered but has no codec.
	#[error("{} values are not supported", kind.name())]
	Unsupported {
		/// Reserved kind.
		kind: Kind,
	},
	/// Programmatic binding used a value variant the kind cannot hold.
	#[error("{} entry cannot hold a {got} value", kind.name())]
	KindMismatch {
		/// Declared kind of the entry.
		kind: Kind,
		/// Label of the rejected value variant.
		got: &'static str,
	},
}
