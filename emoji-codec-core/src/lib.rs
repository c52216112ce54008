//! Core tokenizer and codec for emoji-safe text encoding
//!
//! Text is handled as UTF-16 code units. Any unit outside the Latin-1 range
//! (U+0000..=U+00FF) can be written as its decimal value wrapped in a
//! delimiter, so `"👋"` becomes `"#55357##56395#"` and back again.
//!
//! # Example
//!
//! ```rust
//! use emoji_codec_core::{decode_str, encode_str, tokenize};
//!
//! assert_eq!(encode_str("🔥"), "#128293#");
//! assert_eq!(decode_str("128293"), "🔥");
//!
//! // Two code units, two tokens
//! assert_eq!(tokenize("👋").len(), 2);
//! ```

#![warn(missing_docs)]

pub mod classifier;
pub mod codec;
pub mod error;
pub mod numeric;
pub mod tokenizer;

pub use classifier::{
    contains_non_latin1, contains_non_latin1_units, is_non_latin1_unit, UnitClass,
};
pub use codec::{
    decode_str, decode_token, encode_str, encode_token, encode_units, try_decode_token,
    DecodedUnits, REPLACEMENT_UNIT,
};
pub use error::{CoreError, Result};
pub use numeric::{parse_leading_integer, parse_leading_integer_str};
pub use tokenizer::{tokenize, Grouping, Token, Tokenizer, DEFAULT_DELIMITER};
