use std::net::Ipv4Addr;

use tracing::debug;

use crate::conf::scan::{scan_float, scan_hex, scan_signed, scan_unsigned};
use crate::conf::{ConfError, Result, Value};

/// Text written for a leaf that holds no value.
pub const NULL_TEXT: &str = "NULL";

/// Value kind of an entry: the type tag together with its text codec.
///
/// Discriminants are the stable registry tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Kind {
	/// Raw address, written in hex.
	Void = 0,
	/// Link to a child section.
	Section = 1,
	/// 32-bit signed integer.
	Int = 2,
	/// 32-bit unsigned integer.
	Uint = 3,
	/// Double precision float.
	Float = 4,
	/// Quoted string, optionally bounded.
	String = 5,
	/// `True`/`False` flag.
	Boolean = 6,
	/// Single character.
	Char = 7,
	/// 8-bit signed integer.
	Int8 = 8,
	/// 8-bit unsigned integer.
	Uint8 = 9,
	/// 8-bit unsigned, written as `0x` plus 2 hex digits.
	Hex8 = 10,
	/// Reserved: 8-bit binary.
	Bin8 = 11,
	/// Reserved: 8-bit octal.
	Oct8 = 12,
	/// 16-bit signed integer.
	Int16 = 13,
	/// 16-bit unsigned integer.
	Uint16 = 14,
	/// 16-bit unsigned, written as `0x` plus 4 hex digits.
	Hex16 = 15,
	/// Reserved: 16-bit binary.
	Bin16 = 16,
	/// Reserved: 16-bit octal.
	Oct16 = 17,
	/// 32-bit unsigned, written as `0x` plus 8 hex digits.
	Hex32 = 18,
	/// Reserved: 32-bit binary.
	Bin32 = 19,
	/// Reserved: 32-bit octal.
	Oct32 = 20,
	/// 64-bit signed integer.
	Int64 = 21,
	/// 64-bit unsigned integer.
	Uint64 = 22,
	/// 64-bit unsigned, written as `0x` plus 16 hex digits.
	Hex64 = 23,
	/// Reserved: 64-bit binary.
	Bin64 = 24,
	/// Reserved: 64-bit octal.
	Oct64 = 25,
	/// Dotted-quad IPv4 address.
	Ipv4Addr = 26,
	/// Reserved: RGB colour.
	Rgb = 27,
	/// Reserved: RGB colour with intensity.
	Rgbi = 28,
	/// Reserved: CMYK colour.
	Cymk = 29,
	/// Reserved: ratio.
	Ratio = 30,
}

impl Kind {
	/// 32-bit signed integer, same registry slot as [`Kind::Int`].
	pub const INT32: Self = Self::Int;
	/// 32-bit unsigned integer, same registry slot as [`Kind::Uint`].
	pub const UINT32: Self = Self::Uint;

	/// Every registered kind in tag order.
	pub const ALL: [Self; 31] = [
		Self::Void,
		Self::Section,
		Self::Int,
		Self::Uint,
		Self::Float,
		Self::String,
		Self::Boolean,
		Self::Char,
		Self::Int8,
		Self::Uint8,
		Self::Hex8,
		Self::Bin8,
		Self::Oct8,
		Self::Int16,
		Self::Uint16,
		Self::Hex16,
		Self::Bin16,
		Self::Oct16,
		Self::Hex32,
		Self::Bin32,
		Self::Oct32,
		Self::Int64,
		Self::Uint64,
		Self::Hex64,
		Self::Bin64,
		Self::Oct64,
		Self::Ipv4Addr,
		Self::Rgb,
		Self::Rgbi,
		Self::Cymk,
		Self::Ratio,
	];

	/// Registry tag.
	pub fn tag(self) -> u8 {
		self as u8
	}

	/// Human-readable registry name.
	pub fn name(self) -> &'static str {
		match self {
			Self::Void => "void",
			Self::Section => "section",
			Self::Int => "integer",
			Self::Uint => "unsigned",
			Self::Float => "float",
			Self::String => "string",
			Self::Boolean => "boolean",
			Self::Char => "char",
			Self::Int8 => "int_8",
			Self::Uint8 => "uint_8",
			Self::Hex8 => "hex_8",
			Self::Bin8 => "binary_8",
			Self::Oct8 => "octal_8",
			Self::Int16 => "int_16",
			Self::Uint16 => "uint_16",
			Self::Hex16 => "hex_16",
			Self::Bin16 => "binary_16",
			Self::Oct16 => "octal_16",
			Self::Hex32 => "hex_32",
			Self::Bin32 => "binary_32",
			Self::Oct32 => "octal_32",
			Self::Int64 => "int_64",
			Self::Uint64 => "uint_64",
			Self::Hex64 => "hex_64",
			Self::Bin64 => "binary_64",
			Self::Oct64 => "octal_64",
			Self::Ipv4Addr => "ipv4_address",
			Self::Rgb => "rgb",
			Self::Rgbi => "rgbi",
			Self::Cymk => "cymk",
			Self::Ratio => "ratio",
		}
	}

	/// Look up a kind by tag.
	pub fn from_tag(tag: u8) -> Option<Self> {
		Self::ALL.get(usize::from(tag)).copied()
	}

	/// Look up a kind by registry name.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.name() == name)
	}

	/// Kinds that are registered but carry no codec.
	///
	/// Their encode always reports an absent value and their decode always
	/// fails.
	pub fn is_reserved(self) -> bool {
		matches!(
			self,
			Self::Bin8 | Self::Oct8 | Self::Bin16 | Self::Oct16 | Self::Bin32 | Self::Oct32 | Self::Bin64 | Self::Oct64 | Self::Rgb | Self::Rgbi | Self::Cymk | Self::Ratio
		)
	}

	/// Whether a leaf of this kind can hold `value`.
	pub fn holds(self, value: &Value) -> bool {
		matches!(
			(self, value),
			(Self::Void, Value::Pointer(_))
				| (Self::Int, Value::I32(_))
				| (Self::Uint | Self::Hex32, Value::U32(_))
				| (Self::Float, Value::F64(_))
				| (Self::String, Value::Str(_))
				| (Self::Boolean, Value::Bool(_))
				| (Self::Char, Value::Char(_))
				| (Self::Int8, Value::I8(_))
				| (Self::Uint8 | Self::Hex8, Value::U8(_))
				| (Self::Int16, Value::I16(_))
				| (Self::Uint16 | Self::Hex16, Value::U16(_))
				| (Self::Int64, Value::I64(_))
				| (Self::Uint64 | Self::Hex64, Value::U64(_))
				| (Self::Ipv4Addr, Value::Ipv4(_))
		)
	}

	/// Render `value` in this kind's canonical text.
	///
	/// Returns `None` when there is nothing to render: a null address, a
	/// reserved kind, or a value this kind cannot hold.
	pub fn encode(self, value: &Value) -> Option<String> {
		let text = match (self, value) {
			(Self::Void, Value::Pointer(0)) => return None,
			(Self::Void, Value::Pointer(addr)) => format!("0x{addr:x}"),
			(Self::Int, Value::I32(v)) => v.to_string(),
			(Self::Uint, Value::U32(v)) => v.to_string(),
			(Self::Float, Value::F64(v)) => format!("{v:.6}"),
			(Self::String, Value::Str(v)) => format!("\"{v}\""),
			(Self::Boolean, Value::Bool(true)) => "True".to_owned(),
			(Self::Boolean, Value::Bool(false)) => "False".to_owned(),
			(Self::Char, Value::Char(v)) => v.to_string(),
			(Self::Int8, Value::I8(v)) => v.to_string(),
			(Self::Uint8, Value::U8(v)) => v.to_string(),
			(Self::Hex8, Value::U8(v)) => format!("0x{v:02X}"),
			(Self::Int16, Value::I16(v)) => v.to_string(),
			(Self::Uint16, Value::U16(v)) => v.to_string(),
			(Self::Hex16, Value::U16(v)) => format!("0x{v:04X}"),
			(Self::Hex32, Value::U32(v)) => format!("0x{v:08X}"),
			(Self::Int64, Value::I64(v)) => v.to_string(),
			(Self::Uint64, Value::U64(v)) => v.to_string(),
			(Self::Hex64, Value::U64(v)) => format!("0x{v:016X}"),
			(Self::Ipv4Addr, Value::Ipv4(v)) => v.to_string(),
			_ => return None,
		};
		Some(text)
	}

	/// Convert `text` into a value of this kind.
	///
	/// `max_len` bounds the number of characters kept by string kinds; zero
	/// means unbounded. Integer kinds read the longest numeric prefix and
	/// truncate it to their width.
	pub fn decode(self, text: &str, max_len: usize) -> Result<Value> {
		let reject = || ConfError::Decode { kind: self, text: text.to_owned() };

		let value = match self {
			Self::Void => Value::Pointer(scan_hex(text).ok_or_else(reject)? as usize),
			Self::Int => Value::I32(scan_signed(text).ok_or_else(reject)? as i32),
			Self::Uint => Value::U32(scan_unsigned(text).ok_or_else(reject)? as u32),
			Self::Float => Value::F64(scan_float(text).ok_or_else(reject)?),
			Self::String => Value::Str(decode_string(text, max_len)),
			Self::Boolean => Value::Bool(decode_bool(text).ok_or_else(reject)?),
			Self::Char => Value::Char(text.trim_start().chars().next().ok_or_else(reject)?),
			Self::Int8 => Value::I8(scan_signed(text).ok_or_else(reject)? as i8),
			Self::Uint8 => Value::U8(scan_unsigned(text).ok_or_else(reject)? as u8),
			Self::Hex8 => Value::U8(scan_hex(text).ok_or_else(reject)? as u8),
			Self::Int16 => Value::I16(scan_signed(text).ok_or_else(reject)? as i16),
			Self::Uint16 => Value::U16(scan_unsigned(text).ok_or_else(reject)? as u16),
			Self::Hex16 => Value::U16(scan_hex(text).ok_or_else(reject)? as u16),
			Self::Hex32 => Value::U32(scan_hex(text).ok_or_else(reject)? as u32),
			Self::Int64 => Value::I64(scan_signed(text).ok_or_else(reject)?),
			Self::Uint64 => Value::U64(scan_unsigned(text).ok_or_else(reject)?),
			Self::Hex64 => Value::U64(scan_hex(text).ok_or_else(reject)?),
			Self::Ipv4Addr => Value::Ipv4(decode_ipv4(text).ok_or_else(reject)?),
			Self::Section | Self::Bin8 | Self::Oct8 | Self::Bin16 | Self::Oct16 | Self::Bin32 | Self::Oct32 | Self::Bin64 | Self::Oct64 | Self::Rgb | Self::Rgbi | Self::Cymk | Self::Ratio => {
				return Err(ConfError::Unsupported { kind: self });
			}
		};

		Ok(value)
	}
}

const TRUE_WORDS: [&str; 4] = ["TRUE", "YES", "ON", "1"];
const FALSE_WORDS: [&str; 4] = ["FALSE", "NO", "OFF", "0"];

fn decode_bool(text: &str) -> Option<bool> {
	let text = text.trim_start();
	let starts_with = |word: &str| text.get(..word.len()).is_some_and(|head| head.eq_ignore_ascii_case(word));

	if TRUE_WORDS.into_iter().any(starts_with) {
		return Some(true);
	}
	if FALSE_WORDS.into_iter().any(starts_with) {
		return Some(false);
	}
	None
}

/// Dotted quad in the leading token; anything after the first blank is ignored.
fn decode_ipv4(text: &str) -> Option<Ipv4Addr> {
	text.split_whitespace().next()?.parse().ok()
}

fn decode_string(text: &str, max_len: usize) -> String {
	let text = text.trim_start();

	let body = match text.chars().next() {
		Some(quote @ ('"' | '\'')) => {
			let inner = &text[1..];
			match inner.find(quote) {
				Some(end) => &inner[..end],
				None => {
					debug!(text, "unterminated string");
					""
				}
			}
		}
		_ => text.trim_end(),
	};

	if max_len > 0 {
		body.chars().take(max_len).collect()
	} else {
		body.to_owned()
	}
}

#[cfg(test)]
mod tests;
