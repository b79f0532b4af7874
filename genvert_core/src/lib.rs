//! `genvert_core` produces small, fully deterministic vertical fixture
//! documents for exercising tools that read corpus data line by line.
//!
//! ## Key Tokens
//!
//! Every data line carries a short key built from the 62 symbols
//! `a-z`, `A-Z`, `0-9`. The value is written least significant digit first
//! and never runs past 8 symbols, so very large values are cut short.
//!
//! ```rust
//! use genvert_core::decode;
//! use genvert_core::encode;
//!
//! let token = encode(63).unwrap();
//! assert_eq!(token.as_str(), "bb");
//! assert_eq!(decode(&token).unwrap(), 63);
//!
//! // Zero has no digits at all.
//! assert_eq!(encode(0).unwrap().as_str(), "");
//! ```
//!
//! ## Documents
//!
//! ```text
//! <doc id="foo">
//! <p id="par1">
//! 1	b	data:1
//! 2	c	data:2
//! <m/>
//! ...
//! 5	f	data:5
//! <nl />
//! ...
//! </p>
//! </doc>
//! ```
//!
//! [`Emitter`] streams a document into any [`std::io::Write`], pausing
//! through a [`Delay`] after each data line. [`render_document`] does the
//! same into a string without pausing.
//!
//! ```rust
//! use genvert_core::DocumentOptions;
//! use genvert_core::render_document;
//!
//! let document = render_document(&DocumentOptions::default()).unwrap();
//! assert!(document.starts_with("<doc id=\"foo\">\n<p id=\"par1\">\n1\tb\tdata:1\n"));
//! assert!(document.ends_with("</p>\n</doc>\n"));
//! ```
//!
//! ## Modules
//!
//! - [`alphabet`] — The ordered symbol set and digit lookups.
//! - [`config`] — Loading document overrides from `genvert.toml`.

pub use config::*;
pub use delay::*;
pub use document::*;
pub use error::*;
pub use token::*;

pub mod alphabet;
pub mod config;
mod delay;
mod document;
#[allow(unused_assignments)]
mod error;
mod token;

#[cfg(test)]
mod __fixtures;
