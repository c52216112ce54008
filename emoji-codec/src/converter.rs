//! Word-level orchestration of tokenizer and codec

use crate::config::{Config, ConfigBuilder};
use crate::direction::Direction;
use crate::dto::{ConversionMetadata, ConversionOutput};
use crate::error::{ApiError, Result};
use emoji_codec_core::{
    encode_units, parse_leading_integer, try_decode_token, Grouping, Token, Tokenizer, UnitClass,
    REPLACEMENT_UNIT,
};
use tracing::{debug, trace, warn};

/// Converts text between its plain and delimited-decimal forms
///
/// Stateless apart from its configuration; a single instance can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct EmojiConverter {
    config: Config,
    tokenizer: Tokenizer,
    separator: u16,
}

#[derive(Debug, Default)]
struct Tally {
    words: usize,
    tokens: usize,
    converted: usize,
    placeholders: usize,
}

impl Default for EmojiConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl EmojiConverter {
    /// Create a converter with `#` delimiters and space-separated words
    pub fn new() -> Self {
        let config = Config::default();
        Self {
            tokenizer: Tokenizer::new(u16::from(b'#'), config.grouping),
            separator: u16::from(b' '),
            config,
        }
    }

    /// Create a converter with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tokenizer: Tokenizer::new(config.delimiter_unit()?, config.grouping),
            separator: config.separator_unit()?,
            config,
        })
    }

    /// Create a builder
    pub fn builder() -> EmojiConverterBuilder {
        EmojiConverterBuilder::new()
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert text in the given direction
    pub fn convert(&self, text: &str, direction: Direction) -> String {
        self.run(text, Some(direction), &mut Tally::default())
    }

    /// Encode every non-Latin-1 code unit
    pub fn encode(&self, text: &str) -> String {
        self.convert(text, Direction::Encode)
    }

    /// Decode every numeric token
    pub fn decode(&self, text: &str) -> String {
        self.convert(text, Direction::Decode)
    }

    /// Convert with a direction given by name
    ///
    /// Names other than `encode`/`decode` leave every token unchanged; the
    /// text is still re-tokenized, so delimiters are dropped.
    pub fn convert_named(&self, text: &str, direction: &str) -> String {
        let direction = match direction.parse::<Direction>() {
            Ok(direction) => Some(direction),
            Err(err) => {
                warn!(error = %err, "passing tokens through unchanged");
                None
            }
        };
        self.run(text, direction, &mut Tally::default())
    }

    /// Convert and report what was rewritten
    pub fn convert_detailed(&self, text: &str, direction: Direction) -> ConversionOutput {
        let mut tally = Tally::default();
        let text = self.run(text, Some(direction), &mut tally);
        ConversionOutput {
            text,
            metadata: ConversionMetadata {
                direction,
                words: tally.words,
                tokens: tally.tokens,
                converted_tokens: tally.converted,
                placeholders: tally.placeholders,
            },
        }
    }

    /// Convert many texts; output order follows input order
    pub fn convert_batch<S>(&self, texts: &[S], direction: Direction) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            texts
                .par_iter()
                .map(|text| self.convert(text.as_ref(), direction))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            texts
                .iter()
                .map(|text| self.convert(text.as_ref(), direction))
                .collect()
        }
    }

    /// Tokens of a single word as the converter sees them
    pub fn tokenize(&self, word: &str) -> Vec<Token> {
        self.tokenizer.tokenize(word)
    }

    /// Strictly decode one numeric token
    pub fn decode_token(&self, token: &str) -> Result<String> {
        let units: Vec<u16> = token.encode_utf16().collect();
        let decoded = try_decode_token(&units).map_err(ApiError::Core)?;
        Ok(String::from_utf16_lossy(&decoded))
    }

    fn run(&self, text: &str, direction: Option<Direction>, tally: &mut Tally) -> String {
        let units: Vec<u16> = text.encode_utf16().collect();
        let mut out: Vec<u16> = Vec::with_capacity(units.len());

        for (index, word) in units.split(|&u| u == self.separator).enumerate() {
            if index > 0 {
                out.push(self.separator);
            }
            tally.words += 1;

            for token in self.tokenizer.tokenize_units(word) {
                tally.tokens += 1;
                match direction {
                    Some(Direction::Encode) if token.is_non_latin1() => {
                        trace!(token = %token, "encoding");
                        out.extend(encode_units(&token, self.tokenizer.delimiter()));
                        tally.converted += 1;
                    }
                    Some(Direction::Decode) if reads_as_nonzero(&token) => {
                        match try_decode_token(token.units()) {
                            Ok(decoded) => {
                                trace!(token = %token, "decoding");
                                out.extend_from_slice(&decoded);
                            }
                            Err(err) => {
                                warn!(token = %token, error = %err, "substituting U+FFFD");
                                out.push(REPLACEMENT_UNIT);
                                tally.placeholders += 1;
                            }
                        }
                        tally.converted += 1;
                    }
                    _ => out.extend_from_slice(token.units()),
                }
            }
        }

        debug!(
            direction = direction.map(|d| d.as_str()).unwrap_or("none"),
            words = tally.words,
            converted = tally.converted,
            "conversion finished"
        );
        String::from_utf16_lossy(&out)
    }
}

fn reads_as_nonzero(token: &Token) -> bool {
    match token.units() {
        [unit] => UnitClass::of(*unit) == UnitClass::DigitRun,
        units => parse_leading_integer(units).is_some_and(|value| value != 0),
    }
}

/// Builder for EmojiConverter
#[derive(Debug, Default)]
pub struct EmojiConverterBuilder {
    config_builder: ConfigBuilder,
}

impl EmojiConverterBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config_builder: Config::builder(),
        }
    }

    /// Set the delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.config_builder = self.config_builder.delimiter(delimiter);
        self
    }

    /// Set the word separator
    pub fn word_separator(mut self, separator: char) -> Self {
        self.config_builder = self.config_builder.word_separator(separator);
        self
    }

    /// Set the tokenizer grouping
    pub fn grouping(mut self, grouping: Grouping) -> Self {
        self.config_builder = self.config_builder.grouping(grouping);
        self
    }

    /// Build the converter
    pub fn build(self) -> Result<EmojiConverter> {
        EmojiConverter::with_config(self.config_builder.build()?)
    }
}
