//! Batch runner: one linear pass from source file to result table
//!
//! Reads the source fully into lines, applies the extraction rules to each
//! retained line in file order, and accumulates one record per line. All
//! failures are caught at this boundary: the caller always gets a table
//! back, empty on error, and never an unwound panic or propagated failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::AnalyzeError;
use crate::extractor::RuleSet;
use crate::models::ResultTable;

/// Analyze a log file, returning an ordered result table
///
/// `limit`, when given, caps processing to the first N lines of the file,
/// applied before extraction. On any failure (missing file, unreadable file,
/// non-UTF-8 contents) the error is logged and an empty table is returned;
/// nothing propagates past this boundary.
pub fn run(source: &Path, rules: &RuleSet, limit: Option<usize>) -> ResultTable {
    match read_lines(source) {
        Ok(lines) => {
            let retained = match limit {
                Some(n) => &lines[..n.min(lines.len())],
                None => &lines[..],
            };

            log::debug!(
                "Processing {} of {} lines from {}",
                retained.len(),
                lines.len(),
                source.display()
            );

            let mut table = ResultTable::new(rules);
            for line in retained {
                table.rows.push(rules.extract(line));
            }
            table
        }
        Err(AnalyzeError::SourceNotFound { path }) => {
            log::error!("Log file not found: {}", path.display());
            ResultTable::empty()
        }
        Err(e) => {
            log::error!("An error occurred during log analysis: {}", e);
            ResultTable::empty()
        }
    }
}

/// Read the source as UTF-8 text into an ordered sequence of lines
///
/// Whole-file read by design; the target use case is moderate log files.
fn read_lines(source: &Path) -> Result<Vec<String>, AnalyzeError> {
    let bytes = fs::read(source).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AnalyzeError::SourceNotFound {
            path: source.to_path_buf(),
        },
        _ => AnalyzeError::Read {
            path: source.to_path_buf(),
            source: e,
        },
    })?;

    let text = String::from_utf8(bytes).map_err(|_| AnalyzeError::Decode {
        path: source.to_path_buf(),
    })?;

    Ok(text.lines().map(str::to_string).collect())
}
