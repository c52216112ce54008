//! Per-token encode/decode between characters and delimited decimals

use crate::error::{CoreError, Result};
use crate::numeric::parse_leading_integer;
use crate::tokenizer::{Token, DEFAULT_DELIMITER};
use smallvec::SmallVec;

/// Highest Unicode code point
pub const MAX_CODE_POINT: i64 = 0x10FFFF;

/// Placeholder emitted when a numeric token is not a code point
pub const REPLACEMENT_UNIT: u16 = 0xFFFD;

/// Code units produced by decoding one token
pub type DecodedUnits = SmallVec<[u16; 2]>;

/// Encode a token as `<delimiter><decimal><delimiter>` in code units
///
/// The decimal is the code point at the start of the token.
pub fn encode_units(token: &Token, delimiter: u16) -> Vec<u16> {
    let mut out = Vec::with_capacity(token.len() * 5 + 2);
    out.push(delimiter);
    if let Some(code_point) = token.first_code_point() {
        out.extend(code_point.to_string().encode_utf16());
    }
    out.push(delimiter);
    out
}

/// Encode a token with the default `#` delimiter
pub fn encode_token(token: &Token) -> String {
    String::from_utf16_lossy(&encode_units(token, DEFAULT_DELIMITER))
}

/// Encode the first character of `text` with the default delimiter
pub fn encode_str(text: &str) -> String {
    encode_token(&Token::from(text))
}

/// Decode a numeric token into the code units of the code point it names
///
/// Values up to 0xFFFF yield a single unit, lone surrogates included, so the
/// two halves of an encoded pair re-join once concatenated.
pub fn try_decode_token(units: &[u16]) -> Result<DecodedUnits> {
    let value = parse_leading_integer(units).ok_or(CoreError::NotNumeric)?;
    if !(0..=MAX_CODE_POINT).contains(&value) {
        return Err(CoreError::InvalidCodePoint(value));
    }

    let mut decoded = DecodedUnits::new();
    match u16::try_from(value) {
        Ok(unit) => decoded.push(unit),
        Err(_) => {
            let ch = u32::try_from(value)
                .ok()
                .and_then(char::from_u32)
                .ok_or(CoreError::InvalidCodePoint(value))?;
            let mut buf = [0u16; 2];
            decoded.extend_from_slice(ch.encode_utf16(&mut buf));
        }
    }
    Ok(decoded)
}

/// Decode a numeric token, substituting U+FFFD on failure
pub fn decode_token(units: &[u16]) -> DecodedUnits {
    try_decode_token(units).unwrap_or_else(|_| {
        let mut placeholder = DecodedUnits::new();
        placeholder.push(REPLACEMENT_UNIT);
        placeholder
    })
}

/// Decode a numeric string into text
pub fn decode_str(text: &str) -> String {
    let units: Vec<u16> = text.encode_utf16().collect();
    String::from_utf16_lossy(&decode_token(&units))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    #[test]
    fn test_encode_astral_character() {
        assert_eq!(encode_str("\u{1F525}"), "#128293#");
    }

    #[test]
    fn test_encode_single_units() {
        assert_eq!(encode_token(&Token::from_units(&[0xD83D])), "#55357#");
        assert_eq!(encode_token(&Token::from("\u{2642}")), "#9794#");
        assert_eq!(encode_token(&Token::default()), "##");
    }

    #[test]
    fn test_encode_custom_delimiter() {
        let encoded = encode_units(&Token::from("\u{FE0F}"), u16::from(b'~'));
        assert_eq!(String::from_utf16_lossy(&encoded), "~65039~");
    }

    #[test]
    fn test_decode_astral_character() {
        assert_eq!(decode_str("128293"), "\u{1F525}");
    }

    #[test]
    fn test_decode_surrogate_halves_rejoin() {
        let mut units = decode_token(&utf16("55357")).to_vec();
        units.extend_from_slice(&decode_token(&utf16("56395")));
        assert_eq!(String::from_utf16(&units).unwrap(), "\u{1F44B}");
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(try_decode_token(&utf16("abc")), Err(CoreError::NotNumeric));
        assert_eq!(
            try_decode_token(&utf16("1114112")),
            Err(CoreError::InvalidCodePoint(0x110000))
        );
        assert_eq!(
            try_decode_token(&utf16("-5")),
            Err(CoreError::InvalidCodePoint(-5))
        );
    }

    #[test]
    fn test_decode_placeholder() {
        assert_eq!(decode_str("9999999"), "\u{FFFD}");
        assert_eq!(decode_str("x"), "\u{FFFD}");
    }

    #[test]
    fn test_decode_boundaries() {
        assert_eq!(decode_str("1114111"), "\u{10FFFF}");
        assert_eq!(decode_str("65"), "A");
        assert_eq!(decode_str("12abc"), "\u{C}");
    }
}
