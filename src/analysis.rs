//! Token normalization and validation.
//!
//! Every word entering the synonym graph passes through this module first.
//! Normalization makes equality case-insensitive by construction: the graph
//! only ever sees trimmed, lowercased tokens, so it can use plain string
//! comparison internally.
//!
//! # Examples
//!
//! ```
//! use thesaurus::analysis::normalize;
//!
//! assert_eq!(normalize("  Car "), "car");
//! assert_eq!(normalize("AUTOMOBILE"), "automobile");
//! ```

use crate::error::{Result, ThesaurusError};

/// Minimum accepted token length in characters.
pub const MIN_TOKEN_LEN: usize = 2;

/// Maximum accepted token length in characters (the longest English word is
/// 45 characters).
pub const MAX_TOKEN_LEN: usize = 45;

/// Normalize a raw word into a graph token.
///
/// Trims surrounding whitespace and folds the result to lowercase. The graph
/// assumes all keys have been through this function; unnormalized strings
/// handed to it directly are treated as distinct tokens.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Validate the shape of a normalized token.
///
/// Accepts only alphabetic tokens of [`MIN_TOKEN_LEN`]..=[`MAX_TOKEN_LEN`]
/// characters. Returns [`ThesaurusError::InvalidToken`] otherwise.
pub fn validate_token(token: &str) -> Result<()> {
    let len = token.chars().count();
    if len < MIN_TOKEN_LEN {
        return Err(ThesaurusError::invalid_token(format!(
            "token '{token}' is shorter than {MIN_TOKEN_LEN} characters"
        )));
    }
    if len > MAX_TOKEN_LEN {
        return Err(ThesaurusError::invalid_token(format!(
            "token '{token}' is longer than {MAX_TOKEN_LEN} characters"
        )));
    }
    if !token.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ThesaurusError::invalid_token(format!(
            "token '{token}' contains non-alphabetic characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Car "), "car");
        assert_eq!(normalize("VEHICLE"), "vehicle");
        assert_eq!(normalize("automobile"), "automobile");
    }

    #[test]
    fn test_validate_accepts_plain_words() {
        assert!(validate_token("car").is_ok());
        assert!(validate_token("ab").is_ok());
        assert!(validate_token(&"a".repeat(45)).is_ok());
    }

    #[test]
    fn test_validate_rejects_short_and_long_tokens() {
        assert!(validate_token("").is_err());
        assert!(validate_token("a").is_err());
        assert!(validate_token(&"a".repeat(46)).is_err());
    }

    #[test]
    fn test_validate_rejects_non_alphabetic_tokens() {
        assert!(validate_token("car1").is_err());
        assert!(validate_token("two words").is_err());
        assert!(validate_token("hy-phen").is_err());
    }
}
