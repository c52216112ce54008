//! Data Transfer Objects for API

use crate::direction::Direction;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Converted text with conversion counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// Converted text
    pub text: String,
    /// Conversion counters
    pub metadata: ConversionMetadata,
}

/// Counters collected during one conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionMetadata {
    /// Direction that was applied
    pub direction: Direction,
    /// Words seen, empty words included
    pub words: usize,
    /// Tokens produced by the tokenizer
    pub tokens: usize,
    /// Tokens rewritten by the codec
    pub converted_tokens: usize,
    /// Decoded tokens replaced by U+FFFD
    pub placeholders: usize,
}

impl ConversionOutput {
    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
