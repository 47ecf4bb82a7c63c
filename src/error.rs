//! Error types for the hygiene core.

/// Failures of password generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// Every character-class flag was off, so the charset is empty.
    #[error("select at least one character type")]
    NoCharacterClassSelected,

    /// A zero-length password was requested.
    #[error("password length must be at least 1")]
    ZeroLength,
}

/// Failures of copying the generated password.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CopyError {
    /// There is no password to copy yet.
    #[error("nothing to copy, generate a password first")]
    NothingGenerated,

    /// The clipboard rejected the text.
    #[error("could not copy to the clipboard: {0}")]
    Clipboard(String),
}
