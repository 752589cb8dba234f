use super::{scan_float, scan_hex, scan_signed, scan_unsigned};

#[test]
fn signed_detects_base_from_prefix() {
	assert_eq!(scan_signed("42"), Some(42));
	assert_eq!(scan_signed("  -17"), Some(-17));
	assert_eq!(scan_signed("0x1f"), Some(31));
	assert_eq!(scan_signed("010"), Some(8));
	assert_eq!(scan_signed("+7"), Some(7));
}

#[test]
fn signed_stops_at_first_invalid_digit() {
	assert_eq!(scan_signed("12abc"), Some(12));
	assert_eq!(scan_signed("08"), Some(0));
	assert_eq!(scan_signed("0x"), Some(0));
	assert_eq!(scan_signed("19 # trailing"), Some(19));
}

#[test]
fn signed_rejects_text_without_digits() {
	assert_eq!(scan_signed(""), None);
	assert_eq!(scan_signed("   "), None);
	assert_eq!(scan_signed("abc"), None);
	assert_eq!(scan_signed("-"), None);
}

#[test]
fn signed_saturates_on_overflow() {
	assert_eq!(scan_signed("99999999999999999999"), Some(i64::MAX));
	assert_eq!(scan_signed("-99999999999999999999"), Some(i64::MIN));
	assert_eq!(scan_signed("-9223372036854775808"), Some(i64::MIN));
}

#[test]
fn unsigned_negation_wraps() {
	assert_eq!(scan_unsigned("-1"), Some(u64::MAX));
	assert_eq!(scan_unsigned("0xFFFF"), Some(0xFFFF));
	assert_eq!(scan_unsigned("99999999999999999999999"), Some(u64::MAX));
}

#[test]
fn hex_accepts_optional_prefix() {
	assert_eq!(scan_hex("1A2B"), Some(0x1A2B));
	assert_eq!(scan_hex("0x1a2b"), Some(0x1A2B));
	assert_eq!(scan_hex("  ff"), Some(0xFF));
	assert_eq!(scan_hex("zz"), None);
}

#[test]
fn float_takes_longest_numeric_prefix() {
	assert_eq!(scan_float("1.5"), Some(1.5));
	assert_eq!(scan_float(" -2.25e2xyz"), Some(-225.0));
	assert_eq!(scan_float("3e"), Some(3.0));
	assert_eq!(scan_float("nope"), None);
}
