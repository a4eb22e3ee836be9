//! Data models for listing records, matched articles and the assembled issue.
//!
//! This module defines the structures that flow through the pipeline:
//! - [`ArticleSummary`]: one record extracted from a listing page
//! - [`ListingPage`]: the records of one page plus the next-page pointer
//! - [`MatchedArticle`]: a summary that matched the issue date, with optional full content
//! - [`IssueData`] / [`IssueArticle`]: the render-ready issue

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;

/// An article summary as it appears on a listing page.
///
/// `link` identifies the article; two summaries with the same link are the
/// same article, whichever page they were seen on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleSummary {
    /// Headline as shown on the listing.
    pub title: String,
    /// Absolute URL of the article page.
    pub link: String,
    /// Byline, or the publication name when the listing shows none.
    pub author: String,
    /// Publication date exactly as displayed, e.g. `"7 Aralık 2025"`.
    pub date: String,
    /// Full-size cover image, empty when the record has none.
    pub image_url: String,
    /// Teaser paragraph, empty when the record has none.
    pub excerpt: String,
}

impl ArticleSummary {
    /// Calendar value of [`ArticleSummary::date`], `None` when it does not parse.
    pub fn published_on(&self) -> Option<NaiveDate> {
        dates::parse(&self.date)
    }
}

/// One listing page: its records in page order and where to go next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    pub records: Vec<ArticleSummary>,
    pub next_page: Option<String>,
}

/// A matched summary, later enriched with the article body.
///
/// `content` is `None` until enrichment succeeds; it never affects which
/// articles belong to the issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedArticle {
    pub summary: ArticleSummary,
    pub content: Option<String>,
}

impl From<ArticleSummary> for MatchedArticle {
    fn from(summary: ArticleSummary) -> Self {
        Self {
            summary,
            content: None,
        }
    }
}

/// An article as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IssueArticle {
    pub title: String,
    pub link: String,
    pub author: String,
    pub date: String,
    pub image_url: String,
    pub excerpt: String,
    /// Body markup, or the placeholder when it could not be fetched.
    pub content: String,
    /// Lead paragraph; only the headline carries one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub intro: Option<String>,
}

/// The render-ready issue.
///
/// `full_articles` keeps every article in scan order; the role fields
/// (`headline`, `sidebar`, `bottom_articles`) are positional views of it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IssueData {
    pub issue_date: String,
    pub issue_number: i64,
    pub headline: IssueArticle,
    pub sidebar: Option<IssueArticle>,
    pub bottom_articles: Vec<IssueArticle>,
    pub full_articles: Vec<IssueArticle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(date: &str) -> ArticleSummary {
        ArticleSummary {
            title: "Başlık".to_string(),
            link: "https://example.com/a".to_string(),
            author: "Yazar".to_string(),
            date: date.to_string(),
            image_url: String::new(),
            excerpt: String::new(),
        }
    }

    #[test]
    fn test_published_on() {
        assert_eq!(
            summary("7 Aralık 2025").published_on(),
            NaiveDate::from_ymd_opt(2025, 12, 7)
        );
        assert_eq!(summary("dün").published_on(), None);
    }

    #[test]
    fn test_matched_article_starts_without_content() {
        let matched = MatchedArticle::from(summary("7 Aralık 2025"));
        assert!(matched.content.is_none());
        assert_eq!(matched.summary.date, "7 Aralık 2025");
    }

    #[test]
    fn test_issue_article_omits_missing_intro() {
        let article = IssueArticle {
            title: "T".to_string(),
            link: "https://example.com/t".to_string(),
            author: "A".to_string(),
            date: "7 Aralık 2025".to_string(),
            image_url: String::new(),
            excerpt: "E".to_string(),
            content: "<p>C</p>".to_string(),
            intro: None,
        };
        let json = serde_json::to_string(&article).unwrap();
        assert!(!json.contains("intro"));

        let back: IssueArticle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, article);
    }
}
