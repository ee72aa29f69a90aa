// src/generators/password.rs
use thiserror::Error;

use crate::generators::ascii;
use crate::models::{ComplexityTier, GeneratedPassword, GeneratedPasswordList, PasswordStrength};
use crate::random::SecureSource;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("password length too short: must be at least {min} characters, got {value}")]
    LengthTooShort { value: usize, min: usize },

    #[error("password length too long: cannot exceed {max} characters, got {value}")]
    LengthTooLong { value: usize, max: usize },

    #[error("password count too small: must be at least {min}, got {value}")]
    CountTooSmall { value: usize, min: usize },

    #[error("password count too large: cannot exceed {max}, got {value}")]
    CountTooLarge { value: usize, max: usize },

    #[error("invalid complexity level '{value}': expected one of LOW, MEDIUM, HIGH")]
    InvalidComplexity { value: String },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

// Password generation engine. Owns the secure random source it draws from;
// construct it with SecureSource::init() in production or a seeded source in
// tests.
pub struct PasswordEngine {
    source: SecureSource,
}

impl PasswordEngine {
    pub const MIN_LENGTH: usize = 8;
    pub const MAX_LENGTH: usize = 1024;
    pub const MIN_COUNT: usize = 1;
    pub const MAX_COUNT: usize = 10_000;

    pub fn new(source: SecureSource) -> Self {
        Self { source }
    }

    /// Generate one password of `length` characters for the given tier.
    ///
    /// Every position independently selects a character class uniformly from
    /// the tier's enabled classes, then draws one character from that class.
    /// There is no first-character rule and no mandatory class inclusion.
    pub fn generate(&self, length: usize, complexity: ComplexityTier) -> Result<String> {
        Self::validate_length(length)?;

        let classes = complexity.char_classes();
        let password = (0..length)
            .map(|_| {
                let idx = self.source.next_in_range(0, classes.len() as u32) as usize;
                ascii::random_char(classes[idx], &self.source)
            })
            .collect();

        Ok(password)
    }

    /// Generate `count` independent passwords, in generation order.
    /// Duplicates are permitted; collision probability is negligible at the
    /// allowed lengths.
    pub fn generate_batch(
        &self,
        count: usize,
        length: usize,
        complexity: ComplexityTier,
    ) -> Result<Vec<String>> {
        Self::validate_count(count)?;
        Self::validate_length(length)?;

        (0..count).map(|_| self.generate(length, complexity)).collect()
    }

    // Operation exposed to the CLI front-end: complexity arrives as free
    // text and is matched case-insensitively.
    pub fn generate_password(&self, length: usize, complexity: &str) -> Result<GeneratedPassword> {
        Self::validate_length(length)?;
        let tier = Self::parse_complexity(complexity)?;

        let password = self.generate(length, tier)?;
        let strength = PasswordStrength::rate(length, tier);

        Ok(GeneratedPassword {
            password,
            strength_description: strength.to_string(),
        })
    }

    pub fn generate_password_list(
        &self,
        count: usize,
        length: usize,
        complexity: &str,
    ) -> Result<GeneratedPasswordList> {
        Self::validate_count(count)?;
        Self::validate_length(length)?;
        let tier = Self::parse_complexity(complexity)?;

        let passwords = self.generate_batch(count, length, tier)?;
        let strength = PasswordStrength::rate(length, tier);

        Ok(GeneratedPasswordList {
            passwords,
            strength_description: strength.to_string(),
        })
    }

    fn parse_complexity(input: &str) -> Result<ComplexityTier> {
        ComplexityTier::parse(input).ok_or_else(|| GeneratorError::InvalidComplexity {
            value: input.to_string(),
        })
    }

    fn validate_length(length: usize) -> Result<()> {
        if length < Self::MIN_LENGTH {
            return Err(GeneratorError::LengthTooShort {
                value: length,
                min: Self::MIN_LENGTH,
            });
        }
        if length > Self::MAX_LENGTH {
            return Err(GeneratorError::LengthTooLong {
                value: length,
                max: Self::MAX_LENGTH,
            });
        }
        Ok(())
    }

    fn validate_count(count: usize) -> Result<()> {
        if count < Self::MIN_COUNT {
            return Err(GeneratorError::CountTooSmall {
                value: count,
                min: Self::MIN_COUNT,
            });
        }
        if count > Self::MAX_COUNT {
            return Err(GeneratorError::CountTooLarge {
                value: count,
                max: Self::MAX_COUNT,
            });
        }
        Ok(())
    }
}
