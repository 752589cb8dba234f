use std::net::Ipv4Addr;

use crate::conf::{ConfError, Kind, Value};

#[test]
fn registry_tags_follow_table_order() {
	for (idx, kind) in Kind::ALL.iter().enumerate() {
		assert_eq!(usize::from(kind.tag()), idx);
		assert_eq!(Kind::from_tag(kind.tag()), Some(*kind));
		assert_eq!(Kind::from_name(kind.name()), Some(*kind));
	}
	assert_eq!(Kind::from_tag(31), None);
	assert_eq!(Kind::INT32, Kind::Int);
	assert_eq!(Kind::UINT32.name(), "unsigned");
	assert_eq!(Kind::Ipv4Addr.name(), "ipv4_address");
}

#[test]
fn hex_kinds_pad_to_width() {
	assert_eq!(Kind::Hex8.encode(&Value::U8(10)).as_deref(), Some("0x0A"));
	assert_eq!(Kind::Hex16.encode(&Value::U16(10)).as_deref(), Some("0x000A"));
	assert_eq!(Kind::Hex32.encode(&Value::U32(10)).as_deref(), Some("0x0000000A"));
	assert_eq!(Kind::Hex64.encode(&Value::U64(0xBEEF)).as_deref(), Some("0x000000000000BEEF"));
}

#[test]
fn hex_decode_does_not_need_prefix() {
	assert_eq!(Kind::Hex16.decode("1A2B", 0).expect("hex decodes"), Value::U16(0x1A2B));
	assert_eq!(Kind::Hex16.decode("0x1A2B", 0).expect("hex decodes"), Value::U16(0x1A2B));
	assert_eq!(Kind::Hex8.decode("1FF", 0).expect("hex decodes"), Value::U8(0xFF));
}

#[test]
fn integer_kinds_truncate_to_width() {
	assert_eq!(Kind::Int8.decode("300", 0).expect("decodes"), Value::I8(44));
	assert_eq!(Kind::Uint8.decode("0x1FF", 0).expect("decodes"), Value::U8(0xFF));
	assert_eq!(Kind::Uint16.decode("-1", 0).expect("decodes"), Value::U16(u16::MAX));
	assert_eq!(Kind::Int.decode("-0x10", 0).expect("decodes"), Value::I32(-16));
	assert_eq!(Kind::Uint.decode("017", 0).expect("decodes"), Value::U32(15));
	assert_eq!(Kind::Int64.decode("-9000000000", 0).expect("decodes"), Value::I64(-9_000_000_000));
}

#[test]
fn integer_encode_is_plain_decimal() {
	assert_eq!(Kind::Int.encode(&Value::I32(-5)).as_deref(), Some("-5"));
	assert_eq!(Kind::Uint8.encode(&Value::U8(200)).as_deref(), Some("200"));
	assert_eq!(Kind::Int8.encode(&Value::I8(-128)).as_deref(), Some("-128"));
	assert_eq!(Kind::Uint64.encode(&Value::U64(u64::MAX)).as_deref(), Some("18446744073709551615"));
}

#[test]
fn integer_decode_rejects_non_numeric_text() {
	let err = Kind::Uint16.decode("eighty", 0).expect_err("non-numeric fails");
	assert!(matches!(err, ConfError::Decode { kind: Kind::Uint16, .. }));
}

#[test]
fn boolean_accepts_word_families() {
	for text in ["yes", "ON", "1", "True", "  true"] {
		assert_eq!(Kind::Boolean.decode(text, 0).expect("true word"), Value::Bool(true), "{text}");
	}
	for text in ["no", "OFF", "0", "False"] {
		assert_eq!(Kind::Boolean.decode(text, 0).expect("false word"), Value::Bool(false), "{text}");
	}
	assert!(Kind::Boolean.decode("maybe", 0).is_err());
	assert_eq!(Kind::Boolean.encode(&Value::Bool(true)).as_deref(), Some("True"));
	assert_eq!(Kind::Boolean.encode(&Value::Bool(false)).as_deref(), Some("False"));
}

#[test]
fn char_takes_first_non_space() {
	assert_eq!(Kind::Char.decode("   xyz", 0).expect("char decodes"), Value::Char('x'));
	assert!(Kind::Char.decode("   ", 0).is_err());
	assert_eq!(Kind::Char.encode(&Value::Char('q')).as_deref(), Some("q"));
}

#[test]
fn string_strips_matching_quotes() {
	assert_eq!(Kind::String.decode("  \"hello world\" # tail", 0).expect("decodes"), Value::Str("hello world".into()));
	assert_eq!(Kind::String.decode("'it\"s'", 0).expect("decodes"), Value::Str("it\"s".into()));
	assert_eq!(Kind::String.decode("plain text  \r", 0).expect("decodes"), Value::Str("plain text".into()));
	assert_eq!(Kind::String.decode("\"unterminated", 0).expect("decodes"), Value::Str(String::new()));
	assert_eq!(Kind::String.encode(&Value::Str("a b".into())).as_deref(), Some("\"a b\""));
}

#[test]
fn bounded_string_truncates() {
	assert_eq!(Kind::String.decode("\"abcdefgh\"", 4).expect("decodes"), Value::Str("abcd".into()));
	assert_eq!(Kind::String.decode("ab", 4).expect("decodes"), Value::Str("ab".into()));
	assert_eq!(Kind::String.decode("\u{e9}t\u{e9}s", 2).expect("decodes"), Value::Str("\u{e9}t".into()));
}

#[test]
fn ipv4_round_trips_dotted_quad() {
	let value = Kind::Ipv4Addr.decode(" 192.168.0.10 ", 0).expect("address decodes");
	assert_eq!(value, Value::Ipv4(Ipv4Addr::new(192, 168, 0, 10)));
	assert_eq!(Kind::Ipv4Addr.encode(&value).as_deref(), Some("192.168.0.10"));
	assert!(Kind::Ipv4Addr.decode("300.1.1.1", 0).is_err());
}

#[test]
fn ipv4_ignores_text_after_address() {
	let value = Kind::Ipv4Addr.decode("10.0.0.1   # lan", 0).expect("address decodes");
	assert_eq!(value, Value::Ipv4(Ipv4Addr::new(10, 0, 0, 1)));
	assert_eq!(Kind::Uint16.decode("1500   # mtu", 0).expect("mtu decodes"), Value::U16(1500));
	assert!(Kind::Ipv4Addr.decode("   ", 0).is_err());
	assert!(Kind::Ipv4Addr.decode("10.0.0 # short", 0).is_err());
}

#[test]
fn float_uses_six_decimals() {
	assert_eq!(Kind::Float.encode(&Value::F64(1.5)).as_deref(), Some("1.500000"));
	assert_eq!(Kind::Float.decode("2.25", 0).expect("float decodes"), Value::F64(2.25));
}

#[test]
fn void_encodes_address_and_null() {
	assert_eq!(Kind::Void.encode(&Value::Pointer(0x1000)).as_deref(), Some("0x1000"));
	assert_eq!(Kind::Void.encode(&Value::Pointer(0)), None);
	assert_eq!(Kind::Void.decode("0xdead", 0).expect("address decodes"), Value::Pointer(0xDEAD));
}

#[test]
fn reserved_kinds_never_convert() {
	for kind in Kind::ALL.into_iter().filter(|kind| kind.is_reserved()) {
		assert!(matches!(kind.decode("5", 0), Err(ConfError::Unsupported { .. })), "{}", kind.name());
		assert_eq!(kind.encode(&Value::U32(5)), None);
	}
	assert!(matches!(Kind::Section.decode("5", 0), Err(ConfError::Unsupported { .. })));
}

#[test]
fn holds_matches_storage_variant() {
	assert!(Kind::Hex8.holds(&Value::U8(1)));
	assert!(Kind::Uint8.holds(&Value::U8(1)));
	assert!(!Kind::Uint8.holds(&Value::U16(1)));
	assert!(!Kind::Rgb.holds(&Value::U32(1)));
	assert!(!Kind::Section.holds(&Value::Bool(true)));
}
