use std::net::Ipv4Addr;

/// Owned storage behind a bound leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Raw address held by a `void` leaf.
	Pointer(usize),
	/// `int_8` storage.
	I8(i8),
	/// `uint_8` and `hex_8` storage.
	U8(u8),
	/// `int_16` storage.
	I16(i16),
	/// `uint_16` and `hex_16` storage.
	U16(u16),
	/// `integer` storage.
	I32(i32),
	/// `unsigned` and `hex_32` storage.
	U32(u32),
	/// `int_64` storage.
	I64(i64),
	/// `uint_64` and `hex_64` storage.
	U64(u64),
	/// `float` storage.
	F64(f64),
	/// `boolean` storage.
	Bool(bool),
	/// `char` storage.
	Char(char),
	/// `string` storage, already unquoted and bounded.
	Str(String),
	/// `ipv4_address` storage.
	Ipv4(Ipv4Addr),
}

impl Value {
	/// Short variant label used in diagnostics.
	pub fn label(&self) -> &'static str {
		match self {
			Self::Pointer(_) => "Pointer",
			Self::I8(_) => "I8",
			Self::U8(_) => "U8",
			Self::I16(_) => "I16",
			Self::U16(_) => "U16",
			Self::I32(_) => "I32",
			Self::U32(_) => "U32",
			Self::I64(_) => "I64",
			Self::U64(_) => "U64",
			Self::F64(_) => "F64",
			Self::Bool(_) => "Bool",
			Self::Char(_) => "Char",
			Self::Str(_) => "Str",
			Self::Ipv4(_) => "Ipv4",
		}
	}

	/// Widen any signed integer variant.
	pub fn as_i64(&self) -> Option<i64> {
		match *self {
			Self::I8(v) => Some(i64::from(v)),
			Self::I16(v) => Some(i64::from(v)),
			Self::I32(v) => Some(i64::from(v)),
			Self::I64(v) => Some(v),
			_ => None,
		}
	}

	/// Widen any unsigned integer variant.
	pub fn as_u64(&self) -> Option<u64> {
		match *self {
			Self::U8(v) => Some(u64::from(v)),
			Self::U16(v) => Some(u64::from(v)),
			Self::U32(v) => Some(u64::from(v)),
			Self::U64(v) => Some(v),
			Self::Pointer(v) => Some(v as u64),
			_ => None,
		}
	}

	/// Boolean payload.
	pub fn as_bool(&self) -> Option<bool> {
		match *self {
			Self::Bool(v) => Some(v),
			_ => None,
		}
	}

	/// String payload.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(v) => Some(v),
			_ => None,
		}
	}

	/// Float payload.
	pub fn as_f64(&self) -> Option<f64> {
		match *self {
			Self::F64(v) => Some(v),
			_ => None,
		}
	}

	/// Character payload.
	pub fn as_char(&self) -> Option<char> {
		match *self {
			Self::Char(v) => Some(v),
			_ => None,
		}
	}

	/// Address payload.
	pub fn as_ipv4(&self) -> Option<Ipv4Addr> {
		match *self {
			Self::Ipv4(v) => Some(v),
			_ => None,
		}
	}
}
