//! Configuration module for Creeper
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Command-line flags override values from the file.
//!
//! # Example
//!
//! ```no_run
//! use creeper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("creeper.toml")).unwrap();
//! println!("Crawler will fetch at most {} pages", config.crawler.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, HttpConfig, OutputConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
