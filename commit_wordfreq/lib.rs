//! Count the most used words in a file of commit messages.

pub mod commits;
pub mod error;
pub mod frequency;
pub mod report;

use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub use commits::{bug_related_count, parse_commits, CommitMessage};
pub use error::AnalyzeError;
pub use frequency::{count_words, FrequencyTable, WordCount};

pub const DEFAULT_INPUT: &str = "commit_messages.txt";
pub const DEFAULT_OUTPUT: &str = "commit_word_frequency.txt";
/// How many words end up in the report.
pub const TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl AnalyzerConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}

/// Run the report, printing to stdout.
pub fn analyze(config: &AnalyzerConfig) -> Result<Vec<WordCount>, AnalyzeError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    analyze_to(config, &mut out)
}

/// Read the input, rank its words, print the report to `out` and save it
/// to the configured output file. Nothing is written if the input can't
/// be read.
pub fn analyze_to<W: Write>(
    config: &AnalyzerConfig,
    out: &mut W,
) -> Result<Vec<WordCount>, AnalyzeError> {
    let text = fs::read_to_string(&config.input_path)
        .map_err(|e| AnalyzeError::from_read(config.input_path.clone(), e))?;
    debug!(
        "read {} bytes from {}",
        text.len(),
        config.input_path.display()
    );

    let commits = parse_commits(&text);
    if !commits.is_empty() {
        info!(
            "{} of {} commits look bug-related",
            bug_related_count(&commits),
            commits.len()
        );
    }

    let table = count_words(&text);
    debug!("{} distinct words", table.len());
    let top = table.most_common(TOP_N);

    report::print_report(out, &top)?;
    report::save_report(&config.output_path, &top)?;
    info!("saved report to {}", config.output_path.display());

    writeln!(out, "\nResults saved to {}", config.output_path.display())?;
    out.flush()?;

    Ok(top)
}
