use derive_more::Deref;
use derive_more::Display;
use serde::Serialize;

use crate::GenvertError;
use crate::GenvertResult;
use crate::alphabet::BASE;
use crate::alphabet::KEY_ALPHABET;
use crate::alphabet::MAX_TOKEN_LEN;
use crate::alphabet::TRUNCATION_THRESHOLD;
use crate::alphabet::index_of;

/// A short key built from [`KEY_ALPHABET`] symbols, least significant digit
/// first.
///
/// Tokens hold at most [`MAX_TOKEN_LEN`] symbols. Values that need more
/// digits are cut short, so two large values can share a token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deref, Display, Serialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}
}

impl AsRef<str> for Token {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

/// Encode any integer, rejecting values below zero or above [`u64::MAX`].
pub fn encode(value: impl Into<i128>) -> GenvertResult<Token> {
	let value = value.into();
	let value = u64::try_from(value).map_err(|_| GenvertError::InvalidInput(value))?;
	Ok(encode_unsigned(value))
}

/// Encode `value` into a token.
///
/// `0` encodes to the empty token. Only the first [`MAX_TOKEN_LEN`] digits
/// are kept.
pub fn encode_unsigned(mut value: u64) -> Token {
	let mut symbols = String::with_capacity(MAX_TOKEN_LEN);

	while value > 0 && symbols.len() < MAX_TOKEN_LEN {
		let digit = (value % BASE) as usize;
		symbols.push(char::from(KEY_ALPHABET[digit]));
		value /= BASE;
	}

	Token(symbols)
}

/// Whether encoding `value` drops digits.
pub fn needs_truncation(value: u64) -> bool {
	value >= TRUNCATION_THRESHOLD
}

/// Reconstruct the value of a token by weighting each symbol with
/// `62^position`.
///
/// Only exact for values below `62^8`; for anything larger the token holds
/// the low digits alone.
///
/// Accepts exactly the tokens [`encode_unsigned`] can produce: at most
/// [`MAX_TOKEN_LEN`] symbols, and no trailing zero symbol unless the token is
/// at the length limit.
pub fn decode(token: &str) -> GenvertResult<u64> {
	let len = token.chars().count();
	if len > MAX_TOKEN_LEN {
		return Err(GenvertError::TokenTooLong { len });
	}

	let mut value = 0u64;
	let mut weight = 1u64;

	for (position, symbol) in token.chars().enumerate() {
		let digit =
			index_of(symbol).ok_or(GenvertError::UnknownSymbol { symbol, position })? as u64;
		value += digit * weight;
		weight = weight.saturating_mul(BASE);
	}

	if len < MAX_TOKEN_LEN && token.ends_with(char::from(KEY_ALPHABET[0])) {
		return Err(GenvertError::TrailingZero {
			token: token.to_string(),
		});
	}

	Ok(value)
}
