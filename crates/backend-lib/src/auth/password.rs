// ============================
// crates/backend-lib/src/auth/password.rs
// ============================
//! Password strength scoring and verification.

use serde::Serialize;

/// Characters counted as "special" by the scorer. Fixed set, not a general
/// punctuation class.
const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>?";

/// Character count at which the length criterion is met.
const RECOMMENDED_LENGTH: usize = 10;

/// Character count below which the scorer asks for more characters outright.
const MINIMUM_LENGTH: usize = 8;

/// Independent boolean predicates evaluated over the password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordCriteria {
    pub length: bool,
    pub has_number: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_special_char: bool,
}

/// Result of scoring a password. Not persisted anywhere.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordStrengthResult {
    /// Strength score in `1..=10`.
    pub score: u8,
    pub criteria: PasswordCriteria,
    /// One suggestion per unmet criterion, in a fixed order.
    pub feedback: Vec<String>,
}

/// Presentation bucket for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthLevel {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

/// Score a password.
///
/// Pure and total: any input, including the empty string, produces a result.
/// Length contributes 2 points at 10+ characters, 1 point at 8-9, 0 below;
/// each remaining criterion contributes 2 points. The final score is clamped
/// to `1..=10`.
pub fn score_password(password: &str) -> PasswordStrengthResult {
    let char_count = password.chars().count();

    let criteria = PasswordCriteria {
        length: char_count >= RECOMMENDED_LENGTH,
        has_number: password.chars().any(|c| c.is_ascii_digit()),
        has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        has_special_char: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
    };

    let mut score: u8 = 0;
    if criteria.length {
        score += 2;
    } else if char_count >= MINIMUM_LENGTH {
        score += 1;
    }
    if criteria.has_number {
        score += 2;
    }
    if criteria.has_uppercase {
        score += 2;
    }
    if criteria.has_lowercase {
        score += 2;
    }
    if criteria.has_special_char {
        score += 2;
    }
    let score = score.clamp(1, 10);

    let mut feedback = Vec::new();
    if !criteria.length && char_count < MINIMUM_LENGTH {
        feedback.push("Use at least 8 characters".to_string());
    } else if !criteria.length {
        feedback.push("10 or more characters is recommended".to_string());
    }
    if !criteria.has_number {
        feedback.push("Add a number".to_string());
    }
    if !criteria.has_uppercase {
        feedback.push("Add an uppercase letter".to_string());
    }
    if !criteria.has_lowercase {
        feedback.push("Add a lowercase letter".to_string());
    }
    if !criteria.has_special_char {
        feedback.push("Add a special character (e.g. !@#$%)".to_string());
    }

    PasswordStrengthResult {
        score,
        criteria,
        feedback,
    }
}

/// Map a score to its presentation bucket.
pub fn strength_level(score: u8) -> StrengthLevel {
    match score {
        0..=3 => StrengthLevel::Weak,
        4..=6 => StrengthLevel::Moderate,
        7..=8 => StrengthLevel::Strong,
        _ => StrengthLevel::VeryStrong,
    }
}

/// Compare a supplied password against the stored value.
///
/// The stored value is the plaintext password. Demo-only: any real
/// deployment must store a salted one-way hash and compare against that
/// instead.
pub fn verify_password(stored: &str, supplied: &str) -> bool {
    stored == supplied
}
