use std::fmt;

use log::{debug, info, warn};

use crate::content::sample_reminders;
use crate::error::{CopyError, GeneratorError};
use crate::ledger::Ledger;
use crate::models::{PasswordPolicy, Reminder};
use crate::password::generate;

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Info,
    Destructive,
}

/// A transient, dismissible message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

/// Which character class a switch controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

/// All state for one user session, mutated only through its event handlers.
#[derive(Debug, Clone)]
pub struct Session {
    ledger: Ledger,
    policy: PasswordPolicy,
    generated: Option<String>,
    notification: Option<Notification>,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(sample_reminders(), PasswordPolicy::default())
    }
}

impl Session {
    pub fn new(reminders: Vec<Reminder>, policy: PasswordPolicy) -> Session {
        Session {
            ledger: Ledger::new(reminders),
            policy,
            generated: None,
            notification: None,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// The most recent successfully generated password.
    pub fn generated_password(&self) -> Option<&str> {
        self.generated.as_deref()
    }

    /// The notification on screen, if any.
    pub fn current_notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Clears the notification on screen.
    pub fn dismiss_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    pub fn toggle_reminder(&mut self, id: u64) -> Option<bool> {
        self.ledger.toggle_completion(id)
    }

    /// Sets the password length, clamped into 8..=32.
    pub fn set_length(&mut self, length: usize) {
        self.policy.length = PasswordPolicy::clamp_length(length);
        debug!("Password length set to {}", self.policy.length);
    }

    pub fn increase_length(&mut self) {
        self.set_length(self.policy.length.saturating_add(1));
    }

    pub fn decrease_length(&mut self) {
        self.set_length(self.policy.length.saturating_sub(1));
    }

    pub fn set_class(&mut self, class: CharClass, enabled: bool) {
        let flag = match class {
            CharClass::Uppercase => &mut self.policy.include_uppercase,
            CharClass::Lowercase => &mut self.policy.include_lowercase,
            CharClass::Numbers => &mut self.policy.include_numbers,
            CharClass::Symbols => &mut self.policy.include_symbols,
        };
        *flag = enabled;
        debug!("{:?} enabled = {}", class, enabled);
    }

    pub fn toggle_class(&mut self, class: CharClass) {
        let enabled = match class {
            CharClass::Uppercase => self.policy.include_uppercase,
            CharClass::Lowercase => self.policy.include_lowercase,
            CharClass::Numbers => self.policy.include_numbers,
            CharClass::Symbols => self.policy.include_symbols,
        };
        self.set_class(class, !enabled);
    }

    /// Generates a new password from the current policy.
    ///
    /// On failure a destructive notification is shown and the previously
    /// generated password, if any, is kept.
    pub fn generate_password(&mut self) -> Result<&str, GeneratorError> {
        match generate(&self.policy) {
            Ok(password) => Ok(self.generated.insert(password).as_str()),
            Err(e) => {
                self.notify(Notification {
                    title: "Error".to_string(),
                    description: capitalize(&e.to_string()),
                    variant: Variant::Destructive,
                });
                Err(e)
            }
        }
    }

    /// Hands the current password to `copy`.
    ///
    /// Success is confirmed with an info notification; a failing `copy` shows
    /// a destructive one instead.
    pub fn copy_password<F, E>(&mut self, copy: F) -> Result<(), CopyError>
    where
        F: FnOnce(&str) -> Result<(), E>,
        E: fmt::Display,
    {
        let Some(password) = self.generated.as_deref() else {
            return Err(CopyError::NothingGenerated);
        };
        match copy(password) {
            Ok(()) => {
                info!("Password copied");
                self.notify(Notification {
                    title: "Copied!".to_string(),
                    description: "Password copied to the clipboard".to_string(),
                    variant: Variant::Info,
                });
                Ok(())
            }
            Err(e) => {
                let err = CopyError::Clipboard(e.to_string());
                warn!("{}", err);
                self.notify(Notification {
                    title: "Error".to_string(),
                    description: capitalize(&err.to_string()),
                    variant: Variant::Destructive,
                });
                Err(err)
            }
        }
    }

    /// Shows `notification`, replacing whatever was on screen.
    fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
