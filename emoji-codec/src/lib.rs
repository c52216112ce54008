//! Reversible ASCII-safe encoding of emoji and other non-Latin-1 text
//!
//! Every UTF-16 code unit outside U+0000..=U+00FF is written as its decimal
//! value between two delimiters; Latin-1 text is left as it is. Decoding
//! turns numeric tokens back into the code units they name.
//!
//! # Example
//!
//! ```rust
//! use emoji_codec::{convert, Direction};
//!
//! let encoded = convert("Hello 🌎", Direction::Encode);
//! assert_eq!(encoded, "Hello #55356##57102#");
//! assert_eq!(convert(&encoded, Direction::Decode), "Hello 🌎");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod converter;
pub mod direction;
pub mod dto;
pub mod error;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use converter::{EmojiConverter, EmojiConverterBuilder};
pub use direction::Direction;
pub use dto::{ConversionMetadata, ConversionOutput};
pub use error::{ApiError, Result};

// Re-export from core for convenience
pub use emoji_codec_core::{CoreError, Grouping, Token};

// Convenience functions

/// Convert text with the default configuration
pub fn convert(text: &str, direction: Direction) -> String {
    EmojiConverter::new().convert(text, direction)
}

/// Convert text with a direction given by name
///
/// Unknown names pass tokens through unchanged instead of failing.
pub fn convert_named(text: &str, direction: &str) -> String {
    EmojiConverter::new().convert_named(text, direction)
}

/// Encode text with the default configuration
pub fn encode(text: &str) -> String {
    EmojiConverter::new().encode(text)
}

/// Decode text with the default configuration
pub fn decode(text: &str) -> String {
    EmojiConverter::new().decode(text)
}
