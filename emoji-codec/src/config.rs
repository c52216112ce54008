//! Converter configuration

use crate::error::{ApiError, Result};
use emoji_codec_core::Grouping;
use serde::{Deserialize, Serialize};

/// Configuration for an [`EmojiConverter`](crate::EmojiConverter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Character wrapped around encoded decimals
    pub delimiter: char,
    /// Character separating words
    pub word_separator: char,
    /// Tokenizer grouping of non-Latin-1 units
    pub grouping: Grouping,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: '#',
            word_separator: ' ',
            grouping: Grouping::PerUnit,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load and validate a configuration from TOML
    ///
    /// Missing keys take their default values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the delimiter and separator can drive a conversion
    pub fn validate(&self) -> Result<()> {
        self.delimiter_unit()?;
        self.separator_unit()?;

        for (role, ch) in [
            ("delimiter", self.delimiter),
            ("word separator", self.word_separator),
        ] {
            if is_numeric_char(ch) {
                return Err(ApiError::Config(format!(
                    "{role} '{ch}' would be read as part of a number"
                )));
            }
        }
        if u32::from(self.delimiter) > 0xFF {
            return Err(ApiError::Config(format!(
                "delimiter {:?} must lie in the Latin-1 range",
                self.delimiter
            )));
        }
        if self.delimiter.is_whitespace() {
            return Err(ApiError::Config(
                "delimiter must not be whitespace".to_string(),
            ));
        }
        if self.delimiter == self.word_separator {
            return Err(ApiError::Config(
                "delimiter and word separator must differ".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn delimiter_unit(&self) -> Result<u16> {
        single_unit(self.delimiter, "delimiter")
    }

    pub(crate) fn separator_unit(&self) -> Result<u16> {
        single_unit(self.word_separator, "word separator")
    }
}

fn is_numeric_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '+' | '-')
}

fn single_unit(ch: char, role: &str) -> Result<u16> {
    u16::try_from(u32::from(ch)).map_err(|_| {
        ApiError::Config(format!(
            "{role} {ch:?} must be a single UTF-16 code unit"
        ))
    })
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Set the word separator
    pub fn word_separator(mut self, separator: char) -> Self {
        self.config.word_separator = separator;
        self
    }

    /// Set the tokenizer grouping
    pub fn grouping(mut self, grouping: Grouping) -> Self {
        self.config.grouping = grouping;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
