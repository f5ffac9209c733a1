//! Core data models for Loglens
//!
//! These structures represent the tabular output of one analysis run: one
//! record per input line, with a column set fixed before processing begins.

use crate::extractor::RuleSet;

/// Output column identifier
///
/// The column set of a [`ResultTable`] is determined once from the active
/// rule set and never changes mid-run, even for lines where a rule finds
/// no match (those cells are `None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    LogEntry,
    PatternMatch,
    IpAddress,
    ErrorCode,
    UserAgent,
}

impl Column {
    /// Header name as it appears in CSV output and the console table
    pub fn header(&self) -> &'static str {
        match self {
            Column::LogEntry => "log_entry",
            Column::PatternMatch => "pattern_match",
            Column::IpAddress => "ip_address",
            Column::ErrorCode => "error_code",
            Column::UserAgent => "user_agent",
        }
    }
}

/// The structured result of applying all active rules to one line
///
/// Fixed-shape record: every rule has a dedicated optional field, and the
/// active rule set decides which fields become columns. A `None` value means
/// the rule found no match on that line, which is distinct from a match on
/// the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// The input line with surrounding whitespace removed. Always present.
    pub log_entry: String,
    /// First match of the user-supplied pattern (full matched substring)
    pub pattern_match: Option<String>,
    /// First IPv4 dotted-quad on the line
    pub ip_address: Option<String>,
    /// Digits captured from the first `ERROR <code>` token
    pub error_code: Option<String>,
    /// Remainder of the line after the first `User-Agent:` token
    pub user_agent: Option<String>,
}

impl Record {
    /// Cell value for a column, `None` when the rule did not match
    ///
    /// `LogEntry` is always `Some`; both the console renderer and the CSV
    /// writer read cells exclusively through this accessor.
    pub fn field(&self, column: Column) -> Option<&str> {
        match column {
            Column::LogEntry => Some(self.log_entry.as_str()),
            Column::PatternMatch => self.pattern_match.as_deref(),
            Column::IpAddress => self.ip_address.as_deref(),
            Column::ErrorCode => self.error_code.as_deref(),
            Column::UserAgent => self.user_agent.as_deref(),
        }
    }
}

/// Ordered collection of records for one run, the unit of output
///
/// Row order equals input line order. Consumed once (printed or serialized),
/// then discarded; nothing persists across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    /// Active columns, in fixed output order
    pub columns: Vec<Column>,
    /// One record per processed line
    pub rows: Vec<Record>,
}

impl ResultTable {
    /// Create an empty table with the column set implied by the rule set
    pub fn new(rules: &RuleSet) -> Self {
        Self {
            columns: rules.columns(),
            rows: Vec::new(),
        }
    }

    /// Empty table for the failure path (no columns, no rows)
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
