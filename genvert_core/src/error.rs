use miette::Diagnostic;
use thiserror::Error;

use crate::alphabet::MAX_TOKEN_LEN;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum GenvertError {
	#[error(transparent)]
	#[diagnostic(code(genvert::io_error))]
	Io(#[from] std::io::Error),

	#[error("cannot encode {0}: value must be between 0 and {max}", max = u64::MAX)]
	#[diagnostic(
		code(genvert::invalid_input),
		help("key tokens are only defined for non-negative integers that fit in 64 bits")
	)]
	InvalidInput(i128),

	#[error("unknown symbol `{symbol}` at position {position}")]
	#[diagnostic(
		code(genvert::unknown_symbol),
		help("tokens may only contain the characters a-z, A-Z and 0-9")
	)]
	UnknownSymbol { symbol: char, position: usize },

	#[error("token is {len} symbols long (limit: {max} symbols)", max = MAX_TOKEN_LEN)]
	#[diagnostic(code(genvert::token_too_long))]
	TokenTooLong { len: usize },

	#[error("token `{token}` ends in the zero symbol `a`")]
	#[diagnostic(
		code(genvert::trailing_zero),
		help("drop the trailing `a` symbols; only tokens at the length limit may end in `a`")
	)]
	TrailingZero { token: String },

	#[error("invalid document options: {0}")]
	#[diagnostic(code(genvert::invalid_options))]
	InvalidOptions(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(genvert::config_parse),
		help("check that genvert.toml is valid TOML with an optional [document] section")
	)]
	ConfigParse(String),
}

pub type GenvertResult<T> = Result<T, GenvertError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
