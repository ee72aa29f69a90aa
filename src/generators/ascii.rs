// src/generators/ascii.rs
use crate::random::SecureSource;

// Fixed special-character table. The HIGH-tier charset size depends on this
// staying at 22 glyphs; CharClass::size() reads the length directly.
pub const SPECIAL_CHARS: [char; 22] = [
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '~', '-', '_', '=', '+', '<', '>', '?', '{',
    '}', '[', ']',
];

// One character class the generator can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Special,
}

impl CharClass {
    // Number of candidate glyphs in this class.
    pub fn size(self) -> usize {
        match self {
            CharClass::Lower | CharClass::Upper => 26,
            CharClass::Digit => 10,
            CharClass::Special => SPECIAL_CHARS.len(),
        }
    }
}

// Each primitive maps exactly one uniform draw to one character. The ranges
// are used directly, so no rejection sampling is needed.

pub fn random_lower(source: &SecureSource) -> char {
    (b'a' + source.next_in_range(0, 26) as u8) as char
}

pub fn random_upper(source: &SecureSource) -> char {
    (b'A' + source.next_in_range(0, 26) as u8) as char
}

pub fn random_digit(source: &SecureSource) -> char {
    (b'0' + source.next_in_range(0, 10) as u8) as char
}

pub fn random_special(source: &SecureSource) -> char {
    SPECIAL_CHARS[source.next_in_range(0, SPECIAL_CHARS.len() as u32) as usize]
}

pub fn random_char(class: CharClass, source: &SecureSource) -> char {
    match class {
        CharClass::Lower => random_lower(source),
        CharClass::Upper => random_upper(source),
        CharClass::Digit => random_digit(source),
        CharClass::Special => random_special(source),
    }
}
