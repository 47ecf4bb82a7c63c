use log::warn;

use crate::models::PasswordPolicy;

/// Env var holding the `env_logger` filter.
pub const LOG_ENV: &str = "HYGIENE_LOG";
/// Env var overriding the initial password length.
pub const LENGTH_ENV: &str = "HYGIENE_PASSWORD_LENGTH";

/// Filter used when `HYGIENE_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Runtime settings taken from the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub policy: PasswordPolicy,
}

impl Config {
    /// Reads `HYGIENE_PASSWORD_LENGTH`.
    pub fn from_env() -> Config {
        let mut policy = PasswordPolicy::default();
        if let Ok(raw) = std::env::var(LENGTH_ENV) {
            if let Some(length) = parse_length(&raw) {
                policy.length = length;
            }
        }
        Config { policy }
    }
}

/// Parses a length, clamping it into 8..=32.
///
/// Returns `None` (and logs) if `raw` is not a number.
pub fn parse_length(raw: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(n) => Some(PasswordPolicy::clamp_length(n)),
        Err(e) => {
            warn!("Ignoring {}='{}': {}", LENGTH_ENV, raw, e);
            None
        }
    }
}
