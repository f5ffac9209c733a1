//! CLI argument parsing and command handling

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::extractor::RuleSet;
use crate::formatter::{self, OutputFormatter};
use crate::runner;

/// Loglens: analyze log files for patterns and generate reports
#[derive(Parser, Debug)]
#[command(
    name = "loglens",
    version,
    about = "Analyze log files for patterns and generate reports",
    long_about = "Loglens reads a log file line by line, applies the enabled \
                  regex extraction rules to each line, and prints the results \
                  as a table or writes them to a CSV file.\n\n\
                  Examples:\n  \
                  loglens app.log\n  \
                  loglens app.log -p \"timeout\" -o report.csv\n  \
                  loglens app.log -l 100 --ip_address\n  \
                  loglens app.log --error_codes --user_agents"
)]
pub struct Cli {
    /// Path to the log file to analyze
    #[arg(value_name = "LOG_FILE")]
    pub log_file: PathBuf,

    /// Regex pattern to search for in the log file
    #[arg(short, long, value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Path to the output CSV file (prints to the console when omitted)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Limit the number of log entries to process (must be positive)
    #[arg(short, long, value_name = "N",
          value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: Option<usize>,

    /// Extract IP addresses
    #[arg(long = "ip_address")]
    pub ip_address: bool,

    /// Extract error codes (e.g. "ERROR 1234")
    #[arg(long = "error_codes")]
    pub error_codes: bool,

    /// Extract User-Agent strings
    #[arg(long = "user_agents")]
    pub user_agents: bool,

    /// Use plain console output (disable colors)
    #[arg(long)]
    pub plain: bool,

    /// Enable verbose logging (can be repeated for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Execute the analysis run
    pub fn execute(self) -> Result<()> {
        // Setup logging based on verbosity
        let log_level = match self.verbose {
            0 => "warn",  // Default: only warnings and errors
            1 => "info",  // -v: show info messages
            2 => "debug", // -vv: show debug messages
            _ => "trace", // -vvv: show trace messages
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();

        // A malformed pattern is a configuration error: reported before any
        // line is processed, and the only path that fails past this point.
        let rules = RuleSet::build(
            self.pattern.as_deref(),
            self.ip_address,
            self.error_codes,
            self.user_agents,
        )?;

        handle_analyze(
            &self.log_file,
            &rules,
            self.limit,
            self.output.as_deref(),
            self.plain,
        );

        Ok(())
    }
}

/// Run the batch analysis and route the result table to its destination
///
/// Source and processing failures are already handled inside the runner
/// (logged, empty table); emission failures are logged here. Nothing after
/// configuration changes the process exit code.
fn handle_analyze(
    log_file: &std::path::Path,
    rules: &RuleSet,
    limit: Option<usize>,
    output: Option<&std::path::Path>,
    plain: bool,
) {
    let table = runner::run(log_file, rules, limit);

    if table.is_empty() {
        crate::output::warn("No data to display/save. Check log file or parameters.");
        return;
    }

    match output {
        Some(destination) => match formatter::write_csv(&table, destination) {
            Ok(()) => {
                crate::output::info(&format!(
                    "Analysis results saved to: {}",
                    destination.display()
                ));
            }
            Err(e) => log::error!("An error occurred during log analysis: {:#}", e),
        },
        None => {
            let formatter = OutputFormatter::new(plain);
            formatter.print_table(&table);
        }
    }
}
