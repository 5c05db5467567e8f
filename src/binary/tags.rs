//! Named tag-byte constants for the tagged binary alphabet (§4.1.1).
//!
//! Values are canonical: shared by this decoder and any future encoder, and
//! fixed by the wire format — they MUST NOT be renumbered.

/// Marks a list of size zero.
pub const LIST_EMPTY: u8 = 0;

/// Sentinel; its appearance as a descriptor tag is always an error.
pub const STREAM_END: u8 = 2;

/// First of four 256-entry double-byte token sub-tables.
pub const DICTIONARY_0: u8 = 236;
/// Second of four 256-entry double-byte token sub-tables.
pub const DICTIONARY_1: u8 = 237;
/// Third of four 256-entry double-byte token sub-tables.
pub const DICTIONARY_2: u8 = 238;
/// Fourth of four 256-entry double-byte token sub-tables.
pub const DICTIONARY_3: u8 = 239;

/// List length follows as one byte (`u8`).
pub const LIST_8: u8 = 248;
/// List length follows as two bytes (`u16`, big-endian).
pub const LIST_16: u8 = 249;
/// Composite `"<identity>@<domain>"` string: two follow-up tags.
pub const JID_PAIR: u8 = 250;
/// Packed hex-alphabet string.
pub const HEX_8: u8 = 251;
/// Length-prefixed raw bytes; length is one byte (`u8`).
pub const BINARY_8: u8 = 252;
/// Length-prefixed raw bytes; length is a 20-bit packed integer.
pub const BINARY_20: u8 = 253;
/// Length-prefixed raw bytes; length is four bytes (`u32`, big-endian).
pub const BINARY_32: u8 = 254;
/// Packed nibble-alphabet string.
pub const NIBBLE_8: u8 = 255;

/// Inclusive range of tag values that index directly into `SINGLE_BYTE_TOKENS`.
pub const SINGLE_BYTE_TOKEN_RANGE: std::ops::RangeInclusive<u8> = 3..=235;

/// `true` if `tag` is one of the three list-size tags.
pub fn is_list_tag(tag: u8) -> bool {
    matches!(tag, LIST_EMPTY | LIST_8 | LIST_16)
}

/// `true` if `tag` is one of the four dictionary tags.
pub fn is_dictionary_tag(tag: u8) -> bool {
    matches!(tag, DICTIONARY_0 | DICTIONARY_1 | DICTIONARY_2 | DICTIONARY_3)
}
