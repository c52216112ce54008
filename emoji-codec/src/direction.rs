//! Conversion direction

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which way a conversion runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Replace non-Latin-1 code units with delimited decimals
    Encode,
    /// Replace numeric tokens with the characters they name
    Decode,
}

impl Direction {
    /// Lower-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Encode => "encode",
            Direction::Decode => "decode",
        }
    }

    /// The opposite direction
    pub fn inverse(self) -> Self {
        match self {
            Direction::Encode => Direction::Decode,
            Direction::Decode => Direction::Encode,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("encode") {
            Ok(Direction::Encode)
        } else if s.eq_ignore_ascii_case("decode") {
            Ok(Direction::Decode)
        } else {
            Err(ApiError::UnsupportedDirection(s.to_string()))
        }
    }
}
