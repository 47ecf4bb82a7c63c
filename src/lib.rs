pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod ledger;
pub mod models;
pub mod password;
pub mod session;
pub mod tui;
