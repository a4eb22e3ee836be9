//! Fixed configuration values.
//!
//! Everything here is a constant of the publication rather than a runtime
//! option; the CLI can override the start URL and the page bound only.

use chrono::NaiveDate;

/// Root of the paginated listing that is scanned when no URL is given.
pub const DEFAULT_BASE_URL: &str = "https://daktilo1984.com/daktilo2/";

/// Hard upper bound on the number of listing pages requested per scan.
pub const DEFAULT_MAX_PAGES: usize = 10;

/// Issue published on [`REFERENCE_DATE`].
pub const REFERENCE_ISSUE: i64 = 15;

/// The date that anchors issue numbering (14 Aralık 2025 is issue 15).
pub const REFERENCE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 12, 14) {
    Some(date) => date,
    None => panic!("reference date is not a valid calendar date"),
};

/// Appended to the date tokens to build the output filename.
pub const OUTPUT_FILENAME_SUFFIX: &str = "-daktilo2.html";

/// Used when the issue date cannot be split into day, month and year.
pub const FALLBACK_OUTPUT_FILENAME: &str = "magazine_weekly.html";

/// Substituted for articles whose full content could not be fetched.
pub const CONTENT_PLACEHOLDER: &str = "<p>Content could not be fetched automatically.</p>";

/// Author shown for listing records that carry no byline.
pub const FALLBACK_AUTHOR: &str = "Daktilo1984";

/// Sent with every HTTP request; the site rejects the default reqwest agent.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_reference_date() {
        assert_eq!(REFERENCE_DATE.year(), 2025);
        assert_eq!(REFERENCE_DATE.month(), 12);
        assert_eq!(REFERENCE_DATE.day(), 14);
    }
}
