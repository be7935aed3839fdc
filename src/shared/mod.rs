//! Cross-cutting concerns. Configuration.

pub mod config;
