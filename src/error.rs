//! Error kinds for the analysis pipeline
//!
//! A closed enumeration matched explicitly at the batch runner boundary.
//! Configuration errors abort the run before any line is processed; source
//! and processing errors are logged and yield an empty result table.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// User-supplied regex failed to compile. Configuration-time error,
    /// surfaced before the source file is opened.
    #[error("invalid search pattern: {source}")]
    InvalidPattern {
        #[from]
        source: regex::Error,
    },

    /// Input path does not exist or is unreadable
    #[error("log file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// I/O failure while reading the source
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source contents are not valid UTF-8
    #[error("{path} is not valid UTF-8 text")]
    Decode { path: PathBuf },
}
