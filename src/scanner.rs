//! Date-targeted scan over a paginated article listing.
//!
//! The listing is sorted newest-first. Pages are requested one at a time and
//! every record is classified against the effective target date as newer,
//! equal or older. Equal records are collected (once per link); the first
//! page that shows an older record ends the scan, whether or not anything
//! matched before it. A page bound guarantees termination when pagination
//! misbehaves.
//!
//! # Termination
//!
//! | Condition after a page | Outcome |
//! |------------------------|---------|
//! | fetch failed | [`StopReason::FetchFailed`] |
//! | page had no records | [`StopReason::EmptyPage`] |
//! | matches so far and an older record on this page | [`StopReason::FoundThenPassed`] |
//! | no matches and an older record on this page | [`StopReason::PassedTarget`] |
//! | no next-page pointer | [`StopReason::Exhausted`] |
//! | page bound reached | [`StopReason::PageLimit`] |

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::error::Error;
use tracing::{debug, info, instrument, warn};

use crate::config::REFERENCE_ISSUE;
use crate::dates;
use crate::models::{ArticleSummary, ListingPage};
use crate::numbering::issue_number;

/// Anything that can return one listing page by URL.
pub trait ListingSource {
    /// Fetch the page at `url`. Errors are treated as the end of the listing.
    async fn fetch_page(&self, url: &str) -> Result<ListingPage, Box<dyn Error>>;
}

/// The date the scan matches against, with the text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveTarget {
    pub text: String,
    pub date: NaiveDate,
}

/// Why a scan stopped requesting pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    FetchFailed,
    EmptyPage,
    FoundThenPassed,
    PassedTarget,
    Exhausted,
    PageLimit,
}

/// Result of one scan.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Matching summaries in the order they were first seen.
    pub matches: Vec<ArticleSummary>,
    /// `None` only when no record with a usable date was ever seen.
    pub target: Option<EffectiveTarget>,
    pub issue_number: i64,
    pub stop: StopReason,
    pub pages_scanned: usize,
}

impl ScanOutcome {
    /// No article carried the target date.
    pub fn is_not_found(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn target_text(&self) -> Option<&str> {
        self.target.as_ref().map(|t| t.text.as_str())
    }
}

/// How the records of one page relate to the target date.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct PageClassification {
    has_newer: bool,
    has_older: bool,
    has_equal: bool,
}

impl PageClassification {
    fn record(&mut self, ordering: Ordering) {
        match ordering {
            Ordering::Greater => self.has_newer = true,
            Ordering::Less => self.has_older = true,
            Ordering::Equal => self.has_equal = true,
        }
    }
}

/// Resolve a requested date into a target, normalizing the day first.
///
/// An unparseable request yields `None`, which makes the scan adopt the
/// first dated record it sees.
fn requested_target(requested: &str) -> Option<EffectiveTarget> {
    let text = dates::normalize(requested);
    match dates::parse(&text) {
        Some(date) => {
            info!(target_date = %text, "Looking for articles with requested date");
            Some(EffectiveTarget { text, date })
        }
        None => {
            warn!(requested = %requested, "Requested date does not parse; defaulting to most recent");
            None
        }
    }
}

/// Scan the listing starting at `start_url` for articles published on `requested_date`.
///
/// With no requested date, the date of the first dated record on the first
/// page becomes the target and stays fixed for the whole scan. Records whose
/// date does not parse are ignored. At most `max_pages` pages are requested.
#[instrument(level = "info", skip(source))]
pub async fn scan<S: ListingSource>(
    source: &S,
    start_url: &str,
    requested_date: Option<&str>,
    max_pages: usize,
) -> ScanOutcome {
    let mut effective: Option<EffectiveTarget> = requested_date.and_then(requested_target);
    let mut matches: Vec<ArticleSummary> = Vec::new();
    let mut seen_links: HashSet<String> = HashSet::new();
    let mut next_url = Some(start_url.to_string());
    let mut pages_scanned = 0usize;

    let stop = loop {
        let Some(url) = next_url.take() else {
            info!("No next page");
            break StopReason::Exhausted;
        };
        if pages_scanned >= max_pages {
            warn!(max_pages, %url, "Page limit reached; giving up");
            break StopReason::PageLimit;
        }
        pages_scanned += 1;
        info!(page = pages_scanned, %url, "Scanning listing page");

        let page = match source.fetch_page(&url).await {
            Ok(page) => page,
            Err(e) => {
                warn!(%url, error = %e, "Listing page fetch failed; stopping");
                break StopReason::FetchFailed;
            }
        };
        if page.records.is_empty() {
            info!(%url, "No articles on this page");
            break StopReason::EmptyPage;
        }

        let mut classification = PageClassification::default();
        for record in page.records {
            let Some(published) = record.published_on() else {
                debug!(link = %record.link, date = %record.date, "Skipping record with unparseable date");
                continue;
            };
            let target_date = effective
                .get_or_insert_with(|| {
                    info!(target_date = %record.date, "No date specified; defaulting to most recent");
                    EffectiveTarget {
                        text: record.date.clone(),
                        date: published,
                    }
                })
                .date;

            let ordering = published.cmp(&target_date);
            classification.record(ordering);
            if ordering == Ordering::Equal && seen_links.insert(record.link.clone()) {
                debug!(link = %record.link, title = %record.title, "Matched article");
                matches.push(record);
            }
        }
        debug!(
            page = pages_scanned,
            has_newer = classification.has_newer,
            has_equal = classification.has_equal,
            has_older = classification.has_older,
            "Classified page"
        );

        if !matches.is_empty() && classification.has_older {
            info!(count = matches.len(), "Reached older content after matches; stopping");
            break StopReason::FoundThenPassed;
        }
        if classification.has_older {
            info!("Passed the target date without finding articles; stopping");
            break StopReason::PassedTarget;
        }
        next_url = page.next_page;
    };

    let issue_number = effective
        .as_ref()
        .map(|t| issue_number(&t.text))
        .unwrap_or(REFERENCE_ISSUE);

    info!(
        kept = matches.len(),
        pages = pages_scanned,
        ?stop,
        issue_number,
        "Scan finished"
    );

    ScanOutcome {
        matches,
        target: effective,
        issue_number,
        stop,
        pages_scanned,
    }
}
