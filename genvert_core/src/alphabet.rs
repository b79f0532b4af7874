//! The fixed symbol set used as digits of a key token.
//!
//! Symbol `0` is `a` and symbol `61` is `9`. The order never changes, so a
//! token produced today decodes to the same value tomorrow.

/// Lowercase letters, then uppercase letters, then decimal digits.
pub const KEY_ALPHABET: [u8; 62] = *b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Radix of a key token.
pub const BASE: u64 = KEY_ALPHABET.len() as u64;

/// Maximum number of symbols the encoder will ever produce.
pub const MAX_TOKEN_LEN: usize = 8;

/// Smallest value that needs more than [`MAX_TOKEN_LEN`] symbols (`62^8`).
pub const TRUNCATION_THRESHOLD: u64 = BASE.pow(MAX_TOKEN_LEN as u32);

/// Symbol for the digit `index`.
///
/// Returns `None` when `index` is not a valid digit (`index >= 62`).
pub fn symbol(index: usize) -> Option<char> {
	KEY_ALPHABET.get(index).map(|&byte| char::from(byte))
}

/// Digit value of `symbol`, if it belongs to the alphabet.
pub fn index_of(symbol: char) -> Option<usize> {
	match symbol {
		'a'..='z' => Some(symbol as usize - 'a' as usize),
		'A'..='Z' => Some(symbol as usize - 'A' as usize + 26),
		'0'..='9' => Some(symbol as usize - '0' as usize + 52),
		_ => None,
	}
}
