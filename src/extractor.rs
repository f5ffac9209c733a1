//! Per-line extraction rules
//!
//! Each rule is an independent, stateless regex lookup applied uniformly to
//! every line. Rules never short-circuit one another: a line may satisfy
//! zero, one, or several rules at once. The rule set is built once at
//! startup and never mutated afterwards.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::AnalyzeError;
use crate::models::{Column, Record};

/// Dotted-quad with each group in [0,255]. Tolerates leading zeros per the
/// digit-group grammar; no routability or reservation check.
const IPV4_PATTERN: &str =
    r"\b(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\b";

/// Literal `ERROR` token followed by whitespace and the code digits
const ERROR_CODE_PATTERN: &str = r"ERROR\s+(\d+)";

/// Literal `User-Agent:` token; captures the remainder of the line
const USER_AGENT_PATTERN: &str = r"User-Agent:\s*(.+)";

fn ipv4_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(IPV4_PATTERN).unwrap())
}

fn error_code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ERROR_CODE_PATTERN).unwrap())
}

fn user_agent_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(USER_AGENT_PATTERN).unwrap())
}

/// Capability configuration: which extraction rules are active for this run
///
/// Built from the CLI flags before any line is processed. The active rules
/// determine the column set of the whole result table.
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Compiled user-supplied pattern, when `-p/--pattern` was given
    pattern: Option<Regex>,
    ip_address: bool,
    error_codes: bool,
    user_agents: bool,
}

impl RuleSet {
    /// Compile the rule set from CLI options
    ///
    /// A malformed user-supplied pattern is a configuration error and is
    /// reported here, before the source file is opened.
    pub fn build(
        pattern: Option<&str>,
        ip_address: bool,
        error_codes: bool,
        user_agents: bool,
    ) -> Result<Self, AnalyzeError> {
        let pattern = pattern.map(Regex::new).transpose()?;

        Ok(Self {
            pattern,
            ip_address,
            error_codes,
            user_agents,
        })
    }

    /// Columns this rule set produces, in fixed output order
    pub fn columns(&self) -> Vec<Column> {
        let mut columns = vec![Column::LogEntry];
        if self.pattern.is_some() {
            columns.push(Column::PatternMatch);
        }
        if self.ip_address {
            columns.push(Column::IpAddress);
        }
        if self.error_codes {
            columns.push(Column::ErrorCode);
        }
        if self.user_agents {
            columns.push(Column::UserAgent);
        }
        columns
    }

    /// Apply every active rule to one line, producing a flat record
    ///
    /// `log_entry` is always set to the trimmed line. Each active rule stores
    /// the first match on the line, or `None` when it finds nothing. Fields
    /// of inactive rules stay `None` and their columns are never emitted.
    pub fn extract(&self, line: &str) -> Record {
        let mut record = Record {
            log_entry: line.trim().to_string(),
            ..Record::default()
        };

        if let Some(pattern) = &self.pattern {
            record.pattern_match = pattern.find(line).map(|m| m.as_str().to_string());
        }

        if self.ip_address {
            record.ip_address = ipv4_regex().find(line).map(|m| m.as_str().to_string());
        }

        if self.error_codes {
            record.error_code = error_code_regex()
                .captures(line)
                .map(|c| c[1].to_string());
        }

        if self.user_agents {
            record.user_agent = user_agent_regex()
                .captures(line)
                .map(|c| c[1].to_string());
        }

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_rules() -> RuleSet {
        RuleSet::build(None, true, true, true).unwrap()
    }

    #[test]
    fn test_default_rules_only_log_entry() {
        let rules = RuleSet::build(None, false, false, false).unwrap();
        let record = rules.extract("  some line  \n");

        assert_eq!(rules.columns(), vec![Column::LogEntry]);
        assert_eq!(record.log_entry, "some line");
        assert_eq!(record.pattern_match, None);
        assert_eq!(record.ip_address, None);
        assert_eq!(record.error_code, None);
        assert_eq!(record.user_agent, None);
    }

    #[test]
    fn test_custom_pattern_stores_full_match() {
        let rules = RuleSet::build(Some(r"GET /\S+"), false, false, false).unwrap();
        let record = rules.extract("10.0.0.1 - GET /index.html HTTP/1.1");

        assert_eq!(record.pattern_match.as_deref(), Some("GET /index.html"));
    }

    #[test]
    fn test_custom_pattern_no_match_is_none() {
        let rules = RuleSet::build(Some("timeout"), false, false, false).unwrap();
        let record = rules.extract("all good here");

        assert_eq!(record.pattern_match, None);
    }

    #[test]
    fn test_invalid_pattern_is_configuration_error() {
        let result = RuleSet::build(Some("(unclosed"), false, false, false);
        assert!(matches!(result, Err(AnalyzeError::InvalidPattern { .. })));
    }

    #[test]
    fn test_ipv4_match() {
        let record = all_rules().extract("request from 192.168.1.1 accepted");
        assert_eq!(record.ip_address.as_deref(), Some("192.168.1.1"));
    }

    #[test]
    fn test_ipv4_octet_out_of_range() {
        // 999 exceeds the grouped digit pattern, so the whole quad is rejected
        let record = all_rules().extract("bogus address 999.999.999.999 seen");
        assert_eq!(record.ip_address, None);
    }

    #[test]
    fn test_ipv4_first_match_wins() {
        let record = all_rules().extract("10.0.0.1 forwarded for 172.16.0.2");
        assert_eq!(record.ip_address.as_deref(), Some("10.0.0.1"));
    }

    #[test]
    fn test_error_code_captures_digits_only() {
        let record = all_rules().extract("ERROR 4042: disk full");
        assert_eq!(record.error_code.as_deref(), Some("4042"));
    }

    #[test]
    fn test_error_code_requires_digits() {
        let record = all_rules().extract("ERROR without a code");
        assert_eq!(record.error_code, None);
    }

    #[test]
    fn test_user_agent_captures_remainder() {
        let record = all_rules().extract("User-Agent: Mozilla/5.0");
        assert_eq!(record.user_agent.as_deref(), Some("Mozilla/5.0"));
    }

    #[test]
    fn test_user_agent_keeps_trailing_text() {
        let record =
            all_rules().extract("User-Agent: Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101");
        assert_eq!(
            record.user_agent.as_deref(),
            Some("Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101")
        );
    }

    #[test]
    fn test_rules_are_independent() {
        let rules = RuleSet::build(Some("ERROR"), true, true, false).unwrap();
        let record = rules.extract("192.168.0.5 ERROR 500 User-Agent: curl/8.0");

        // One line can satisfy several rules at once
        assert_eq!(record.pattern_match.as_deref(), Some("ERROR"));
        assert_eq!(record.ip_address.as_deref(), Some("192.168.0.5"));
        assert_eq!(record.error_code.as_deref(), Some("500"));
        // user_agents rule inactive, so no value even though the token is present
        assert_eq!(record.user_agent, None);
    }

    #[test]
    fn test_columns_follow_active_rules() {
        let rules = RuleSet::build(Some("x"), false, true, false).unwrap();
        assert_eq!(
            rules.columns(),
            vec![Column::LogEntry, Column::PatternMatch, Column::ErrorCode]
        );
    }
}
