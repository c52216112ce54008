//! Latin-1 boundary classification of UTF-16 code units

/// Highest code point of the Latin-1 range
pub const LATIN1_MAX: u16 = 0x00FF;

/// Classification of a single code unit for tokenization
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitClass {
    /// Unit inside U+0000..=U+00FF that is not a non-zero digit
    Latin1,
    /// Unit outside the Latin-1 range (including surrogate halves)
    NonLatin1,
    /// ASCII digit `1`-`9`: reads as a non-zero integer on its own
    DigitRun,
}

impl UnitClass {
    /// Classify a code unit
    pub fn of(unit: u16) -> Self {
        if is_non_latin1_unit(unit) {
            UnitClass::NonLatin1
        } else if (u16::from(b'1')..=u16::from(b'9')).contains(&unit) {
            UnitClass::DigitRun
        } else {
            UnitClass::Latin1
        }
    }

    /// Whether the unit lies outside Latin-1
    pub fn is_non_latin1(self) -> bool {
        self == UnitClass::NonLatin1
    }
}

/// Check if a code unit lies outside U+0000..=U+00FF
#[inline]
pub fn is_non_latin1_unit(unit: u16) -> bool {
    unit > LATIN1_MAX
}

/// Check if any code unit lies outside Latin-1
pub fn contains_non_latin1_units(units: &[u16]) -> bool {
    units.iter().copied().any(is_non_latin1_unit)
}

/// Check if any character of the string lies outside Latin-1
///
/// A surrogate pair counts as non-Latin-1 through either half, so testing
/// chars and testing UTF-16 units agree.
pub fn contains_non_latin1(text: &str) -> bool {
    text.chars().any(|ch| u32::from(ch) > u32::from(LATIN1_MAX))
}
