//! Configuration module for snoomirror
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. The config file is optional; every option has a default.

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig};

// Re-export parser functions
pub use parser::load_config;
