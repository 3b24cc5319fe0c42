//! CLI subcommand implementations.

pub mod auth;
pub mod create;
pub mod products;
pub mod shell;
pub mod update;
