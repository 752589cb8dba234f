use crate::conf::{ConfError, Kind, Result, Value};

/// Ordered list of entries forming one level of the configuration tree.
///
/// Names are expected to be unique within a section but this is not
/// enforced; lookups return the first entry with a matching name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
	entries: Vec<Entry>,
}

impl Section {
	/// Create an empty section.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append an entry, builder style.
	pub fn with(mut self, entry: Entry) -> Self {
		self.entries.push(entry);
		self
	}

	/// Append an entry.
	pub fn push(&mut self, entry: Entry) {
		self.entries.push(entry);
	}

	/// Entries in declaration order.
	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	/// Mutable entries in declaration order.
	pub fn entries_mut(&mut self) -> &mut [Entry] {
		&mut self.entries
	}

	/// Number of entries at this level.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether this level declares no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// First entry named exactly `name` at this level.
	pub fn find(&self, name: &str) -> Option<&Entry> {
		self.entries.iter().find(|entry| entry.name() == name)
	}

	/// Mutable variant of [`Section::find`].
	pub fn find_mut(&mut self, name: &str) -> Option<&mut Entry> {
		self.entries.iter_mut().find(|entry| entry.name() == name)
	}
}

/// Payload of an entry: a typed leaf or a nested section.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	/// Scalar variable. `value` is `None` until first bound.
	Leaf {
		/// Declared kind; fixed for the life of the entry.
		kind: Kind,
		/// Backing storage.
		value: Option<Value>,
	},
	/// Child section.
	Section(Section),
}

/// Named node of the configuration tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
	name: Box<str>,
	max_len: usize,
	node: Node,
}

impl Entry {
	/// Declare an unbound leaf. Its storage is created by the first
	/// successful decode.
	///
	/// Declaring a leaf of [`Kind::Section`] yields an empty child section.
	pub fn leaf(name: impl Into<Box<str>>, kind: Kind) -> Self {
		let node = match kind {
			Kind::Section => Node::Section(Section::new()),
			kind => Node::Leaf { kind, value: None },
		};
		Self {
			name: name.into(),
			max_len: 0,
			node,
		}
	}

	/// Declare an unbound string leaf keeping at most `max_len` characters
	/// (zero for unbounded).
	pub fn string(name: impl Into<Box<str>>, max_len: usize) -> Self {
		Self::leaf(name, Kind::String).with_max_len(max_len)
	}

	/// Declare a link to a child section.
	pub fn section(name: impl Into<Box<str>>, section: Section) -> Self {
		Self {
			name: name.into(),
			max_len: 0,
			node: Node::Section(section),
		}
	}

	/// Bind an initial value, checked against the declared kind.
	pub fn with_value(mut self, value: Value) -> Result<Self> {
		self.set_value(value)?;
		Ok(self)
	}

	/// Set the character bound used when decoding strings.
	pub fn with_max_len(mut self, max_len: usize) -> Self {
		self.max_len = max_len;
		self
	}

	/// Name matched by path segments and assignment keys.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Declared kind; [`Kind::Section`] for section links.
	pub fn kind(&self) -> Kind {
		match &self.node {
			Node::Leaf { kind, .. } => *kind,
			Node::Section(_) => Kind::Section,
		}
	}

	/// String bound in characters; zero for unbounded.
	pub fn max_len(&self) -> usize {
		self.max_len
	}

	/// Leaf or section payload.
	pub fn node(&self) -> &Node {
		&self.node
	}

	/// Whether this entry links a child section.
	pub fn is_section(&self) -> bool {
		matches!(self.node, Node::Section(_))
	}

	/// Child section of a section link.
	pub fn child(&self) -> Option<&Section> {
		match &self.node {
			Node::Section(section) => Some(section),
			Node::Leaf { .. } => None,
		}
	}

	/// Mutable child section of a section link.
	pub fn child_mut(&mut self) -> Option<&mut Section> {
		match &mut self.node {
			Node::Section(section) => Some(section),
			Node::Leaf { .. } => None,
		}
	}

	/// Current value of a bound leaf.
	pub fn value(&self) -> Option<&Value> {
		match &self.node {
			Node::Leaf { value, .. } => value.as_ref(),
			Node::Section(_) => None,
		}
	}

	/// Replace the value of a leaf.
	pub fn set_value(&mut self, new_value: Value) -> Result<()> {
		let path = self.name.to_string();
		match &mut self.node {
			Node::Section(_) => Err(ConfError::NotALeaf { path }),
			Node::Leaf { kind, value } => {
				if !kind.holds(&new_value) {
					return Err(ConfError::KindMismatch {
						kind: *kind,
						got: new_value.label(),
					});
				}
				*value = Some(new_value);
				Ok(())
			}
		}
	}

	/// Drop a leaf's storage, returning it to the unbound state.
	pub fn unbind(&mut self) -> Option<Value> {
		match &mut self.node {
			Node::Leaf { value, .. } => value.take(),
			Node::Section(_) => None,
		}
	}

	/// Canonical text of the leaf value, or `None` when there is nothing to
	/// render (unbound, reserved kind, or a section link).
	pub fn encode(&self) -> Option<String> {
		match &self.node {
			Node::Leaf { kind, value } => value.as_ref().and_then(|value| kind.encode(value)),
			Node::Section(_) => None,
		}
	}

	/// Decode `text` into the leaf, binding storage on first use.
	///
	/// On failure the previous value is left untouched.
	pub fn decode(&mut self, text: &str) -> Result<()> {
		let max_len = self.max_len;
		let path = self.name.to_string();
		match &mut self.node {
			Node::Section(_) => Err(ConfError::NotALeaf { path }),
			Node::Leaf { kind, value } => {
				*value = Some(kind.decode(text, max_len)?);
				Ok(())
			}
		}
	}
}
