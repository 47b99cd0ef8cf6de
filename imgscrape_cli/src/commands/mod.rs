//! CLI subcommand implementations.

pub mod all;
pub mod brave;
pub mod duckduckgo;
pub mod google;
