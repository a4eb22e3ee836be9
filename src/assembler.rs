//! Arrange matched articles into the positional roles of an issue.
//!
//! The first article is the headline, the second the sidebar, the rest go
//! to the bottom of the page. The output filename comes from the issue date.

use thiserror::Error;
use tracing::{info, instrument};

use crate::config::{CONTENT_PLACEHOLDER, FALLBACK_OUTPUT_FILENAME, OUTPUT_FILENAME_SUFFIX};
use crate::models::{IssueArticle, IssueData, MatchedArticle};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AssembleError {
    #[error("no articles found for {0}; nothing to publish")]
    NoArticles(String),
}

impl From<MatchedArticle> for IssueArticle {
    fn from(article: MatchedArticle) -> Self {
        let MatchedArticle { summary, content } = article;
        Self {
            title: summary.title,
            link: summary.link,
            author: summary.author,
            date: summary.date,
            image_url: summary.image_url,
            excerpt: summary.excerpt,
            content: content.unwrap_or_else(|| CONTENT_PLACEHOLDER.to_string()),
            intro: None,
        }
    }
}

/// Build the render-ready issue.
///
/// # Errors
///
/// [`AssembleError::NoArticles`] when `articles` is empty.
#[instrument(level = "info", skip(articles), fields(count = articles.len()))]
pub fn assemble(
    articles: Vec<MatchedArticle>,
    issue_date: &str,
    issue_number: i64,
) -> Result<IssueData, AssembleError> {
    let mut full_articles: Vec<IssueArticle> = articles.into_iter().map(IssueArticle::from).collect();
    let Some(first) = full_articles.first_mut() else {
        return Err(AssembleError::NoArticles(issue_date.to_string()));
    };
    first.intro = Some(first.excerpt.clone());

    let headline = full_articles[0].clone();
    let sidebar = full_articles.get(1).cloned();
    let bottom_articles = full_articles.iter().skip(2).cloned().collect::<Vec<_>>();

    info!(
        issue_number,
        %issue_date,
        sidebar = sidebar.is_some(),
        bottom = bottom_articles.len(),
        "Assembled issue"
    );

    Ok(IssueData {
        issue_date: issue_date.to_string(),
        issue_number,
        headline,
        sidebar,
        bottom_articles,
        full_articles,
    })
}

/// Output filename for an issue date: `"7 Aralık 2025"` → `"7Aralık25-daktilo2.html"`.
///
/// Four-character years are cut to their last two characters. Dates with
/// fewer than three tokens get the fixed fallback name.
pub fn output_filename(issue_date: &str) -> String {
    let parts: Vec<&str> = issue_date.split_whitespace().collect();
    if parts.len() < 3 {
        return FALLBACK_OUTPUT_FILENAME.to_string();
    }
    let (day, month, year) = (parts[0], parts[1], parts[2]);
    let short_year: String = if year.chars().count() == 4 {
        year.chars().skip(2).collect()
    } else {
        year.to_string()
    };
    format!("{day}{month}{short_year}{OUTPUT_FILENAME_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::tests::record;

    fn matched(count: usize) -> Vec<MatchedArticle> {
        (0..count)
            .map(|i| MatchedArticle {
                summary: record(&format!("link-{i}"), "7 Aralık 2025"),
                content: Some(format!("<p>Body {i}</p>")),
            })
            .collect()
    }

    #[test]
    fn test_single_article_has_no_sidebar() {
        let issue = assemble(matched(1), "7 Aralık 2025", 14).unwrap();

        assert_eq!(issue.headline.link, "link-0");
        assert!(issue.sidebar.is_none());
        assert!(issue.bottom_articles.is_empty());
        assert_eq!(issue.full_articles.len(), 1);
        assert_eq!(issue.issue_number, 14);
    }

    #[test]
    fn test_five_articles_fill_every_role() {
        let issue = assemble(matched(5), "7 Aralık 2025", 14).unwrap();

        assert_eq!(issue.headline.link, "link-0");
        assert_eq!(issue.sidebar.as_ref().map(|a| a.link.as_str()), Some("link-1"));
        let bottom: Vec<&str> = issue.bottom_articles.iter().map(|a| a.link.as_str()).collect();
        assert_eq!(bottom, vec!["link-2", "link-3", "link-4"]);
        assert_eq!(issue.full_articles.len(), 5);
    }

    #[test]
    fn test_headline_intro_copies_excerpt() {
        let issue = assemble(matched(2), "7 Aralık 2025", 14).unwrap();

        assert_eq!(issue.headline.intro.as_deref(), Some("Excerpt link-0"));
        assert_eq!(issue.full_articles[0].intro.as_deref(), Some("Excerpt link-0"));
        assert!(issue.sidebar.unwrap().intro.is_none());
    }

    #[test]
    fn test_missing_content_gets_placeholder() {
        let mut articles = matched(2);
        articles[1].content = None;

        let issue = assemble(articles, "7 Aralık 2025", 14).unwrap();

        assert_eq!(issue.headline.content, "<p>Body 0</p>");
        assert_eq!(issue.sidebar.unwrap().content, CONTENT_PLACEHOLDER);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let err = assemble(Vec::new(), "7 Aralık 2025", 14).unwrap_err();
        assert_eq!(err, AssembleError::NoArticles("7 Aralık 2025".to_string()));
        assert!(err.to_string().contains("7 Aralık 2025"));
    }

    #[test]
    fn test_output_filename() {
        assert_eq!(output_filename("7 Aralık 2025"), "7Aralık25-daktilo2.html");
        assert_eq!(output_filename("14 Ocak 26"), "14Ocak26-daktilo2.html");
        assert_eq!(output_filename("1 Mart 12025"), "1Mart12025-daktilo2.html");
    }

    #[test]
    fn test_output_filename_falls_back_on_malformed_date() {
        assert_eq!(output_filename("Aralık 2025"), FALLBACK_OUTPUT_FILENAME);
        assert_eq!(output_filename(""), FALLBACK_OUTPUT_FILENAME);
    }
}
