mod entry;
mod error;
mod file;
mod kind;
mod locate;
mod outline;
mod parse;
mod resolve;
mod scan;
mod value;
mod write;

/// Tree node types and the declaration builders.
pub use entry::{Entry, Node, Section};
/// Error and result aliases.
pub use error::{ConfError, Result};
/// Whole-file load, save, and console dump.
pub use file::{dump, load, save};
/// Type registry and its codecs.
pub use kind::{Kind, NULL_TEXT};
/// Configuration file search.
pub use locate::locate;
/// Schema-less record of a configuration text.
pub use outline::{Assignment, Header, Outline};
/// Text parser entry points.
pub use parse::{ParseSink, parse, parse_str, parse_with};
/// Path separator used by section headers and lookups.
pub use resolve::SEPARATOR;
/// Owned leaf storage.
pub use value::Value;
/// Text writer entry points.
pub use write::{render, write_tree};
