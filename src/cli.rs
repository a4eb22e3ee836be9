//! Command-line interface definitions for Daktilo Weekly.
//!
//! The positional argument keeps the dual meaning the tool has always had:
//! a value containing `http` is a listing URL, anything else is an issue date.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_BASE_URL, DEFAULT_MAX_PAGES};

/// Command-line arguments for Daktilo Weekly.
///
/// # Examples
///
/// ```sh
/// # Newest articles, asking for a date first
/// daktilo_weekly
///
/// # A specific day
/// daktilo_weekly "07 Aralık 2025"
///
/// # Start from another listing page, no prompt
/// daktilo_weekly https://daktilo1984.com/daktilo2/page/3/ --no-prompt
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Listing URL (if it contains "http") or issue date such as "07 Aralık 2025"
    pub target: Option<String>,

    /// Listing page the scan starts from
    #[arg(long, env = "DAKTILO_BASE_URL")]
    pub base_url: Option<String>,

    /// Issue date in "day monthName year" form; takes precedence over TARGET
    #[arg(short, long)]
    pub date: Option<String>,

    /// Maximum number of listing pages to scan
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: usize,

    /// Directory the HTML issue is written to (defaults to the current directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Also write the render-ready issue as JSON to this path
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Never prompt for a date; scan for the newest articles instead
    #[arg(long)]
    pub no_prompt: bool,
}

impl Cli {
    /// Listing URL the scan starts from.
    pub fn start_url(&self) -> String {
        self.target
            .as_deref()
            .filter(|t| t.contains("http"))
            .or(self.base_url.as_deref())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string()
    }

    /// Issue date given on the command line, if any.
    pub fn requested_date(&self) -> Option<String> {
        self.date.clone().or_else(|| {
            self.target
                .as_deref()
                .filter(|t| !t.contains("http"))
                .map(str::to_string)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["daktilo_weekly"]);

        assert_eq!(cli.start_url(), DEFAULT_BASE_URL);
        assert_eq!(cli.requested_date(), None);
        assert_eq!(cli.max_pages, DEFAULT_MAX_PAGES);
        assert!(!cli.no_prompt);
    }

    #[test]
    fn test_positional_date() {
        let cli = Cli::parse_from(["daktilo_weekly", "07 Aralık 2025"]);

        assert_eq!(cli.requested_date().as_deref(), Some("07 Aralık 2025"));
        assert_eq!(cli.start_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_positional_url() {
        let cli = Cli::parse_from(["daktilo_weekly", "https://daktilo1984.com/daktilo2/page/2/"]);

        assert_eq!(cli.start_url(), "https://daktilo1984.com/daktilo2/page/2/");
        assert_eq!(cli.requested_date(), None);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "daktilo_weekly",
            "--base-url",
            "https://example.com/blog/",
            "-d",
            "14 Aralık 2025",
            "--max-pages",
            "3",
            "-o",
            "/tmp/issues",
            "--json-output",
            "/tmp/issues/issue.json",
            "--no-prompt",
        ]);

        assert_eq!(cli.start_url(), "https://example.com/blog/");
        assert_eq!(cli.requested_date().as_deref(), Some("14 Aralık 2025"));
        assert_eq!(cli.max_pages, 3);
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/issues")));
        assert_eq!(cli.json_output, Some(PathBuf::from("/tmp/issues/issue.json")));
        assert!(cli.no_prompt);
    }
}
