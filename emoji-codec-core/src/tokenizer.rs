//! Code-unit tokenizer
//!
//! Splits a word into the tokens the codec works on. Plain words are walked
//! one UTF-16 code unit at a time; words carrying the delimiter are treated
//! as already encoded and split on it.

use crate::classifier::contains_non_latin1_units;
use smallvec::SmallVec;
use std::fmt;

/// Delimiter used around encoded code points (`#`)
pub const DEFAULT_DELIMITER: u16 = b'#' as u16;

/// Inline capacity of a token: a lone unit or a surrogate pair
const INLINE_UNITS: usize = 2;

/// Contiguous run of code units taken as one unit of conversion
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Token {
    units: SmallVec<[u16; INLINE_UNITS]>,
}

impl Token {
    /// Create a token from code units
    pub fn from_units(units: &[u16]) -> Self {
        Self {
            units: SmallVec::from_slice(units),
        }
    }

    fn single(unit: u16) -> Self {
        let mut units = SmallVec::new();
        units.push(unit);
        Self { units }
    }

    /// Code units of the token
    pub fn units(&self) -> &[u16] {
        &self.units
    }

    /// Number of code units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the token holds no units
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Whether any unit lies outside Latin-1
    pub fn is_non_latin1(&self) -> bool {
        contains_non_latin1_units(&self.units)
    }

    /// Code point at the start of the token
    ///
    /// A leading surrogate pair yields the combined code point; an unpaired
    /// surrogate yields its own value.
    pub fn first_code_point(&self) -> Option<u32> {
        char::decode_utf16(self.units.iter().copied())
            .next()
            .map(|decoded| match decoded {
                Ok(ch) => u32::from(ch),
                Err(err) => u32::from(err.unpaired_surrogate()),
            })
    }

    /// Render the token, replacing unpaired surrogates with U+FFFD
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self {
            units: text.encode_utf16().collect(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

/// How consecutive non-Latin-1 units are grouped
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Grouping {
    /// Every code unit is its own token
    #[default]
    PerUnit,
    /// A high surrogate directly followed by a low surrogate forms one token
    SurrogatePairs,
}

/// Word tokenizer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tokenizer {
    delimiter: u16,
    grouping: Grouping,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER, Grouping::default())
    }
}

impl Tokenizer {
    /// Create a tokenizer for the given delimiter unit and grouping
    pub fn new(delimiter: u16, grouping: Grouping) -> Self {
        Self {
            delimiter,
            grouping,
        }
    }

    /// Delimiter unit
    pub fn delimiter(&self) -> u16 {
        self.delimiter
    }

    /// Grouping mode
    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    /// Tokenize a word
    pub fn tokenize(&self, word: &str) -> Vec<Token> {
        let units: Vec<u16> = word.encode_utf16().collect();
        self.tokenize_units(&units)
    }

    /// Tokenize a word given as UTF-16 code units
    pub fn tokenize_units(&self, units: &[u16]) -> Vec<Token> {
        if units.contains(&self.delimiter) {
            return self.split_encoded(units);
        }

        let mut tokens: Vec<Token> = Vec::with_capacity(units.len());
        for &unit in units {
            match tokens.last_mut() {
                Some(open) if self.extends(open, unit) => open.units.push(unit),
                _ => tokens.push(Token::single(unit)),
            }
        }
        tokens
    }

    /// Already-encoded words: one token per non-empty fragment
    fn split_encoded(&self, units: &[u16]) -> Vec<Token> {
        units
            .split(|&u| u == self.delimiter)
            .filter(|fragment| !fragment.is_empty())
            .map(Token::from_units)
            .collect()
    }

    fn extends(&self, open: &Token, unit: u16) -> bool {
        match self.grouping {
            Grouping::PerUnit => false,
            Grouping::SurrogatePairs => {
                is_low_surrogate(unit)
                    && matches!(open.units(), [high] if is_high_surrogate(*high))
            }
        }
    }
}

fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Tokenize a word with the default delimiter and per-unit grouping
pub fn tokenize(word: &str) -> Vec<Token> {
    Tokenizer::default().tokenize(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units_of(tokens: &[Token]) -> Vec<Vec<u16>> {
        tokens.iter().map(|t| t.units().to_vec()).collect()
    }

    #[test]
    fn test_emoji_splits_into_units() {
        let tokens = tokenize("\u{1F64B}\u{200D}\u{2642}\u{FE0F}");
        assert_eq!(
            units_of(&tokens),
            vec![
                vec![0xD83D],
                vec![0xDE4B],
                vec![0x200D],
                vec![0x2642],
                vec![0xFE0F]
            ]
        );
    }

    #[test]
    fn test_plain_characters_stay_single() {
        let tokens = tokenize("hello");
        assert_eq!(tokens.len(), 5);
        assert!(tokens.iter().all(|t| t.len() == 1));
        assert_eq!(tokens[1].to_string(), "e");
    }

    #[test]
    fn test_encoded_word_splits_on_delimiter() {
        let tokens = tokenize("#55357##56395#Hello");
        let rendered: Vec<String> = tokens.iter().map(Token::to_string).collect();
        assert_eq!(rendered, vec!["55357", "56395", "Hello"]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("#").is_empty());
        assert!(tokenize("####").is_empty());
    }

    #[test]
    fn test_surrogate_pair_grouping() {
        let tokenizer = Tokenizer::new(DEFAULT_DELIMITER, Grouping::SurrogatePairs);
        let tokens = tokenizer.tokenize("a\u{1F525}\u{2642}\u{1F30E}");
        assert_eq!(
            units_of(&tokens),
            vec![
                vec![u16::from(b'a')],
                vec![0xD83D, 0xDD25],
                vec![0x2642],
                vec![0xD83C, 0xDF0E]
            ]
        );
    }

    #[test]
    fn test_pairing_never_merges_three_units() {
        let tokenizer = Tokenizer::new(DEFAULT_DELIMITER, Grouping::SurrogatePairs);
        let tokens = tokenizer.tokenize_units(&[0xD83D, 0xDE4B, 0xDE4B]);
        assert_eq!(units_of(&tokens), vec![vec![0xD83D, 0xDE4B], vec![0xDE4B]]);
    }

    #[test]
    fn test_first_code_point() {
        assert_eq!(Token::from("\u{1F525}").first_code_point(), Some(128293));
        assert_eq!(Token::from_units(&[0xD83D]).first_code_point(), Some(55357));
        assert_eq!(Token::from("ab").first_code_point(), Some(97));
        assert_eq!(Token::default().first_code_point(), None);
    }

    #[test]
    fn test_custom_delimiter() {
        let tokenizer = Tokenizer::new(u16::from(b'~'), Grouping::PerUnit);
        let tokens = tokenizer.tokenize("~9731~x#");
        let rendered: Vec<String> = tokens.iter().map(Token::to_string).collect();
        assert_eq!(rendered, vec!["9731", "x#"]);
    }
}
