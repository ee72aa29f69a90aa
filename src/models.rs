// src/models.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::generators::ascii::CharClass;

// Complexity tier selecting which character classes a password draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplexityTier {
    Low,
    Medium,
    High,
}

impl ComplexityTier {
    pub const ALL: [ComplexityTier; 3] =
        [ComplexityTier::Low, ComplexityTier::Medium, ComplexityTier::High];

    // Case-insensitive match against the tier names.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "LOW" => Some(ComplexityTier::Low),
            "MEDIUM" => Some(ComplexityTier::Medium),
            "HIGH" => Some(ComplexityTier::High),
            _ => None,
        }
    }

    // Character classes enabled for this tier. This table is the single
    // source of truth: charset_size() sums the class sizes, and the generator
    // selects from the same slice, so the entropy math cannot drift from the
    // characters actually drawn.
    pub fn char_classes(self) -> &'static [CharClass] {
        match self {
            ComplexityTier::Low => &[CharClass::Lower, CharClass::Upper],
            ComplexityTier::Medium => &[CharClass::Lower, CharClass::Upper, CharClass::Digit],
            ComplexityTier::High => &[
                CharClass::Lower,
                CharClass::Upper,
                CharClass::Digit,
                CharClass::Special,
            ],
        }
    }

    // Combined alphabet size: LOW 52, MEDIUM 62, HIGH 84.
    pub fn charset_size(self) -> usize {
        self.char_classes().iter().map(|class| class.size()).sum()
    }
}

impl fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexityTier::Low => write!(f, "LOW"),
            ComplexityTier::Medium => write!(f, "MEDIUM"),
            ComplexityTier::High => write!(f, "HIGH"),
        }
    }
}

// Discrete strength bucket derived from entropy bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Reasonable,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    // Thresholds are strict upper bounds except the open top bucket.
    fn from_entropy(entropy_bits: f64) -> Self {
        if entropy_bits < 28.0 {
            StrengthLevel::VeryWeak
        } else if entropy_bits < 36.0 {
            StrengthLevel::Weak
        } else if entropy_bits < 60.0 {
            StrengthLevel::Reasonable
        } else if entropy_bits < 128.0 {
            StrengthLevel::Strong
        } else {
            StrengthLevel::VeryStrong
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak - Not recommended for any use",
            StrengthLevel::Weak => "Weak - Vulnerable to attacks",
            StrengthLevel::Reasonable => "Reasonable - Acceptable for low-security applications",
            StrengthLevel::Strong => "Strong - Suitable for most applications",
            StrengthLevel::VeryStrong => "Very Strong - Suitable for high-security applications",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

// Entropy-based strength rating, computed once from (length, complexity).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PasswordStrength {
    pub entropy_bits: f64,
    pub level: StrengthLevel,
}

impl PasswordStrength {
    pub fn rate(length: usize, complexity: ComplexityTier) -> Self {
        let entropy_bits = length as f64 * (complexity.charset_size() as f64).log2();
        Self {
            entropy_bits,
            level: StrengthLevel::from_entropy(entropy_bits),
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Strength: {} ({:.2} bits of entropy)",
            self.level, self.entropy_bits
        )
    }
}

// Result objects for the two exposed operations.

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength_description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPasswordList {
    pub passwords: Vec<String>,
    pub strength_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        for input in ["low", "LOW", "LoW"] {
            assert_eq!(ComplexityTier::parse(input), Some(ComplexityTier::Low));
        }
        assert_eq!(ComplexityTier::parse("medium"), Some(ComplexityTier::Medium));
        assert_eq!(ComplexityTier::parse("High"), Some(ComplexityTier::High));
        assert_eq!(ComplexityTier::parse("bogus"), None);
        assert_eq!(ComplexityTier::parse(""), None);
    }

    #[test]
    fn charset_sizes_follow_the_class_table() {
        assert_eq!(ComplexityTier::Low.charset_size(), 52);
        assert_eq!(ComplexityTier::Medium.charset_size(), 62);
        assert_eq!(ComplexityTier::High.charset_size(), 84);

        // The advertised size must equal the sum of the classes the
        // generator actually draws from.
        for tier in ComplexityTier::ALL {
            let summed: usize = tier.char_classes().iter().map(|c| c.size()).sum();
            assert_eq!(tier.charset_size(), summed);
        }
    }

    #[test]
    fn strength_of_16_low_is_strong() {
        let strength = PasswordStrength::rate(16, ComplexityTier::Low);
        assert!((strength.entropy_bits - 91.21).abs() < 0.01);
        assert_eq!(strength.level, StrengthLevel::Strong);
    }

    #[test]
    fn level_thresholds_are_strict_upper_bounds() {
        assert_eq!(StrengthLevel::from_entropy(0.0), StrengthLevel::VeryWeak);
        assert_eq!(StrengthLevel::from_entropy(27.99), StrengthLevel::VeryWeak);
        assert_eq!(StrengthLevel::from_entropy(28.0), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_entropy(35.99), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_entropy(36.0), StrengthLevel::Reasonable);
        assert_eq!(StrengthLevel::from_entropy(59.99), StrengthLevel::Reasonable);
        assert_eq!(StrengthLevel::from_entropy(60.0), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_entropy(127.99), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_entropy(128.0), StrengthLevel::VeryStrong);
    }

    #[test]
    fn strength_description_has_level_and_entropy() {
        let strength = PasswordStrength::rate(16, ComplexityTier::High);
        let rendered = strength.to_string();
        assert!(rendered.starts_with("Strength: "));
        assert!(rendered.contains("bits of entropy"));
        // Two-decimal entropy: 16 * log2(84) = 102.28.
        assert!(rendered.contains("102.28"));
    }
}
