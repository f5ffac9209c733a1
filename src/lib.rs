//! Loglens: regex-driven log file analysis
//!
//! Loglens reads a log file line by line, applies a configurable set of
//! regex extraction rules (a user-supplied pattern, IPv4 addresses,
//! `ERROR <code>` tokens, `User-Agent:` strings), and reports the results
//! as an aligned console table or a CSV file.
//!
//! # Architecture
//!
//! - **Extractor**: Compiles the active rules once at startup; produces one
//!   flat record per line
//! - **Runner**: Reads the source file, applies the extractor in file order,
//!   and accumulates an ordered result table
//! - **Formatter**: Renders the table to the console or serializes it to CSV
//!
//! # Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use loglens::extractor::RuleSet;
//! use loglens::runner;
//!
//! let rules = RuleSet::build(None, true, false, false).unwrap();
//! let table = runner::run(Path::new("access.log"), &rules, Some(100));
//!
//! println!("Processed {} lines", table.rows.len());
//! ```

pub mod cli;
pub mod error;
pub mod extractor;
pub mod formatter;
pub mod models;
pub mod output;
pub mod runner;

// Re-export commonly used types
pub use error::AnalyzeError;
pub use extractor::RuleSet;
pub use formatter::OutputFormatter;
pub use models::{Column, Record, ResultTable};
