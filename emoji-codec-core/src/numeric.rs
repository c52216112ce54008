//! Permissive reading of a leading integer
//!
//! Decoding only fires on tokens that start with a non-zero integer, and the
//! reading is deliberately loose: leading whitespace and a sign are accepted
//! and anything after the digit run is ignored (`"12abc"` reads as 12).
//! A `0x`/`0X` prefix after the sign switches to hexadecimal.

const BYTE_ORDER_MARK: char = '\u{FEFF}';
const NEXT_LINE: char = '\u{85}';

fn is_skippable_space(unit: u16) -> bool {
    match char::from_u32(u32::from(unit)) {
        Some(ch) => ch == BYTE_ORDER_MARK || (ch.is_whitespace() && ch != NEXT_LINE),
        None => false,
    }
}

fn digit_value(unit: u16, radix: u32) -> Option<i64> {
    char::from_u32(u32::from(unit))
        .filter(char::is_ascii)
        .and_then(|ch| ch.to_digit(radix))
        .map(i64::from)
}

fn has_hex_prefix(units: &[u16]) -> bool {
    match units {
        [zero, x, ..] => {
            *zero == u16::from(b'0') && (*x == u16::from(b'x') || *x == u16::from(b'X'))
        }
        _ => false,
    }
}

/// Read the integer at the start of `units`
///
/// Returns `None` when no digit follows the optional whitespace, sign and
/// hex prefix (`"0x"` alone reads as nothing).
/// Magnitudes beyond `i64` saturate, which keeps them out of code point range.
pub fn parse_leading_integer(units: &[u16]) -> Option<i64> {
    let start = units
        .iter()
        .position(|&u| !is_skippable_space(u))
        .unwrap_or(units.len());
    let mut rest = &units[start..];

    let negative = match rest.first() {
        Some(&u) if u == u16::from(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(&u) if u == u16::from(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    let radix: u32 = if has_hex_prefix(rest) {
        rest = &rest[2..];
        16
    } else {
        10
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in rest.iter().map_while(|&u| digit_value(u, radix)) {
        seen_digit = true;
        value = value.saturating_mul(i64::from(radix)).saturating_add(digit);
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { value.saturating_neg() } else { value })
}

/// Read the integer at the start of a string
pub fn parse_leading_integer_str(text: &str) -> Option<i64> {
    let units: Vec<u16> = text.encode_utf16().collect();
    parse_leading_integer(&units)
}
