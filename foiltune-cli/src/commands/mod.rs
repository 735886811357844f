//! CLI command handlers.

pub mod calc;
pub mod common;
pub mod config;
pub mod init;
pub mod presets;
pub mod query;
