use log::{debug, warn};
use rand::Rng;

use crate::error::GeneratorError;
use crate::models::PasswordPolicy;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Builds the character set for a policy.
///
/// Classes are appended in a fixed order: uppercase, lowercase, digits, symbols.
/// Returns an empty string when no class is enabled.
pub fn build_charset(policy: &PasswordPolicy) -> String {
    let mut charset = String::new();
    if policy.include_uppercase { charset.push_str(UPPERCASE); }
    if policy.include_lowercase { charset.push_str(LOWERCASE); }
    if policy.include_numbers { charset.push_str(NUMBERS); }
    if policy.include_symbols { charset.push_str(SYMBOLS); }
    charset
}

/// Generates a password using the thread-local RNG.
pub fn generate(policy: &PasswordPolicy) -> Result<String, GeneratorError> {
    generate_with(policy, &mut rand::rng())
}

/// Generates a password drawing from the given RNG.
///
/// Each character is an independent, uniform pick from the charset, so
/// characters may repeat and an enabled class may be absent from the result.
///
/// # Errors
/// - [`GeneratorError::NoCharacterClassSelected`] if every class is disabled.
/// - [`GeneratorError::ZeroLength`] if `policy.length` is 0.
pub fn generate_with<R: Rng + ?Sized>(policy: &PasswordPolicy, rng: &mut R) -> Result<String, GeneratorError> {
    if !policy.has_any_class() {
        warn!("Password generation refused: no character class selected");
        return Err(GeneratorError::NoCharacterClassSelected);
    }
    if policy.length == 0 {
        warn!("Password generation refused: zero length");
        return Err(GeneratorError::ZeroLength);
    }

    let charset = build_charset(policy);

    // Every class is ASCII, so byte indexing is char indexing.
    let bytes = charset.as_bytes();
    let password: String = (0..policy.length)
        .map(|_| char::from(bytes[rng.random_range(0..bytes.len())]))
        .collect();

    debug!("Generated password of length {} from {} candidate characters", policy.length, bytes.len());
    Ok(password)
}
