use crate::core::errors::LedgerError;
use zxcvbn::Score;

/// Minimum zxcvbn score (0..=4) a password needs to pass registration.
pub const MIN_STRENGTH_SCORE: u8 = 3;

/// Strength of a candidate password on the 0..=4 scale.
///
/// Pure evaluation, no side effects; the estimator looks at entropy and
/// known patterns (dictionary words, l33t substitutions, sequences).
pub fn strength_score(password: &str) -> u8 {
    match zxcvbn::zxcvbn(password, &[]).score() {
        Score::Zero => 0,
        Score::One => 1,
        Score::Two => 2,
        Score::Three => 3,
        _ => 4,
    }
}

pub fn hash_password(plaintext: &str) -> Result<String, LedgerError> {
    bcrypt::hash(plaintext, bcrypt::DEFAULT_COST)
        .map_err(|e| LedgerError::InternalServerError(format!("Password hashing error: {}", e)))
}

pub fn verify_password(plaintext: &str, hash: &str) -> Result<bool, LedgerError> {
    bcrypt::verify(plaintext, hash)
        .map_err(|e| LedgerError::InternalServerError(format!("Password verification error: {}", e)))
}
