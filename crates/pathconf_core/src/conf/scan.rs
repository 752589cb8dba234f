//! Numeric prefix scanners with C library conversion semantics.
//!
//! Each scanner skips leading whitespace, reads the longest valid numeric
//! prefix and ignores whatever trails it. Text without a single digit is
//! rejected.

/// Parse like `strtoll(text, _, 0)`, saturating at the `i64` bounds.
pub(crate) fn scan_signed(text: &str) -> Option<i64> {
	let number = split_number(text, 0)?;
	let magnitude = number.magnitude;

	if number.negative {
		if number.overflow || magnitude > i64::MIN.unsigned_abs() {
			return Some(i64::MIN);
		}
		Some(0_i64.wrapping_sub_unsigned(magnitude))
	} else {
		if number.overflow || magnitude > i64::MAX as u64 {
			return Some(i64::MAX);
		}
		Some(magnitude as i64)
	}
}

/// Parse like `strtoull(text, _, 0)`: a leading `-` negates modulo 2^64.
pub(crate) fn scan_unsigned(text: &str) -> Option<u64> {
	unsigned_with_radix(text, 0)
}

/// Parse like `sscanf(text, "%X")`: hex digits with an optional `0x`.
pub(crate) fn scan_hex(text: &str) -> Option<u64> {
	unsigned_with_radix(text, 16)
}

/// Parse the longest decimal floating point prefix.
pub(crate) fn scan_float(text: &str) -> Option<f64> {
	let text = skip_space(text);
	let end = text
		.char_indices()
		.find(|(_, ch)| !(ch.is_ascii_digit() || matches!(ch, '+' | '-' | '.' | 'e' | 'E')))
		.map_or(text.len(), |(idx, _)| idx);

	(1..=end).rev().find_map(|len| text[..len].parse::<f64>().ok())
}

fn unsigned_with_radix(text: &str, base: u32) -> Option<u64> {
	let number = split_number(text, base)?;
	if number.overflow {
		return Some(u64::MAX);
	}
	if number.negative {
		return Some(number.magnitude.wrapping_neg());
	}
	Some(number.magnitude)
}

struct Number {
	negative: bool,
	magnitude: u64,
	overflow: bool,
}

fn split_number(text: &str, base: u32) -> Option<Number> {
	let mut rest = skip_space(text);

	let mut negative = false;
	if let Some(stripped) = rest.strip_prefix('-') {
		negative = true;
		rest = stripped;
	} else if let Some(stripped) = rest.strip_prefix('+') {
		rest = stripped;
	}

	let radix = match base {
		0 if has_hex_prefix(rest) => {
			rest = &rest[2..];
			16
		}
		0 if rest.starts_with('0') => 8,
		0 => 10,
		16 => {
			if has_hex_prefix(rest) {
				rest = &rest[2..];
			}
			16
		}
		other => other,
	};

	let mut magnitude = 0_u64;
	let mut overflow = false;
	let mut digits = 0_usize;
	for ch in rest.chars() {
		let Some(digit) = ch.to_digit(radix) else {
			break;
		};
		digits += 1;
		match magnitude.checked_mul(u64::from(radix)).and_then(|value| value.checked_add(u64::from(digit))) {
			Some(value) => magnitude = value,
			None => overflow = true,
		}
	}

	if digits == 0 {
		return None;
	}

	Some(Number { negative, magnitude, overflow })
}

fn has_hex_prefix(text: &str) -> bool {
	let bytes = text.as_bytes();
	bytes.len() > 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') && bytes[2].is_ascii_hexdigit()
}

fn skip_space(text: &str) -> &str {
	text.trim_start_matches(|ch: char| ch.is_ascii_whitespace() || ch == '\u{0b}')
}

#[cfg(test)]
mod tests;
