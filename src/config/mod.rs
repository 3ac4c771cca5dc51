//! Configuration module for Fetch-Verdict
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key is optional; a missing file section yields the built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use fetch_verdict::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("fetcher.toml")).unwrap();
//! println!("Fetch timeout: {:?}", config.fetcher.timeout());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetcherConfig, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
