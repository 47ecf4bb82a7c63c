//! # Hygiene
//!
//! A terminal assistant for digital hygiene: a security score built from a list of
//! reminders, a random password generator, and short guides on staying safe.
//!
//! ## Usage
//!
//! ### Interactive Mode (TUI)
//!
//! ```bash
//! hygiene
//! # or explicitly
//! hygiene ui
//! ```
//!
//! #### TUI Key Bindings
//!
//! *   `1`-`5` / `Tab`: Switch between Home, Reminders, Passwords, Learning, Dashboard
//! *   `Esc`: Dismiss the notification
//! *   `q`: Quit
//!
//! **Reminders**: `j`/`k` to move, `Space` to toggle done.
//!
//! **Passwords**: `←`/`→` length, `u`/`l`/`n`/`s` character types, `g` generate, `y` copy.
//!
//! ### Command Line Interface (CLI)
//!
//! ```bash
//! hygiene generate --length 20 --no-symbols
//! hygiene reminders --complete 2
//! hygiene dashboard --complete 1 --complete 2 --json
//! hygiene learn
//! ```
//!
//! Nothing is saved: every run starts from the same sample reminders.
//!
//! ## Environment
//!
//! *   `HYGIENE_LOG`: log filter (default `warn`).
//! *   `HYGIENE_PASSWORD_LENGTH`: initial password length, clamped to 8-32.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use hygiene::commands::*;
use hygiene::config::{Config, DEFAULT_LOG_FILTER, LOG_ENV};
use hygiene::content::sample_reminders;
use hygiene::models::PasswordPolicy;
use hygiene::session::Session;
use hygiene::tui::run_tui;

#[derive(Parser)]
#[command(name = "hygiene")]
#[command(about = "Digital hygiene assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random passwords
    Generate {
        /// Password length (8-32)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(8..=32))]
        length: Option<u8>,
        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,
        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,
        /// Leave out digits
        #[arg(long)]
        no_numbers: bool,
        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,
        /// How many passwords to print
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        count: u64,
    },
    /// List reminders
    Reminders {
        /// Toggle completion of a reminder before listing (repeatable)
        #[arg(short, long)]
        complete: Vec<u64>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the security dashboard
    Dashboard {
        /// Toggle completion of a reminder before scoring (repeatable)
        #[arg(short, long)]
        complete: Vec<u64>,
        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Show tips and guides
    Learn,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
    /// Open interactive TUI
    Ui,
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(LOG_ENV, DEFAULT_LOG_FILTER)
    ).init();

    let config = Config::from_env();

    let cli = Cli::parse();
    let mut session = Session::new(sample_reminders(), config.policy);

    let result = match cli.command {
        Some(Commands::Generate { length, no_uppercase, no_lowercase, no_numbers, no_symbols, count }) => {
            let policy = PasswordPolicy {
                length: length.map(usize::from).unwrap_or(config.policy.length),
                include_uppercase: !no_uppercase,
                include_lowercase: !no_lowercase,
                include_numbers: !no_numbers,
                include_symbols: !no_symbols,
            };
            cmd_generate(&policy, count as usize).map_err(anyhow::Error::from)
        }
        Some(Commands::Reminders { complete, json }) => {
            apply_toggles(&mut session, &complete);
            cmd_reminders(&session, json)
        }
        Some(Commands::Dashboard { complete, json }) => {
            apply_toggles(&mut session, &complete);
            cmd_dashboard(&session, json)
        }
        Some(Commands::Learn) => {
            cmd_learn();
            Ok(())
        }
        Some(Commands::Completions { shell }) => {
            let shell_enum = match shell.as_str() {
                "bash" => Shell::Bash,
                "zsh" => Shell::Zsh,
                "fish" => Shell::Fish,
                "powershell" => Shell::PowerShell,
                "elvish" => Shell::Elvish,
                _ => {
                    eprintln!("Unsupported shell: {}", shell);
                    std::process::exit(1);
                }
            };
            let mut cmd = Cli::command();
            generate(shell_enum, &mut cmd, "hygiene", &mut io::stdout());
            Ok(())
        }
        Some(Commands::Ui) | None => run_tui(session),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_count_must_be_positive() {
        assert!(Cli::try_parse_from(["hygiene", "generate", "--count", "0"]).is_err());
        match Cli::try_parse_from(["hygiene", "generate", "-c", "3"]).unwrap().command {
            Some(Commands::Generate { count, .. }) => assert_eq!(count, 3),
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_generate_length_range() {
        assert!(Cli::try_parse_from(["hygiene", "generate", "--length", "7"]).is_err());
        assert!(Cli::try_parse_from(["hygiene", "generate", "--length", "33"]).is_err());
        assert!(Cli::try_parse_from(["hygiene", "generate", "--length", "32"]).is_ok());
    }
}
