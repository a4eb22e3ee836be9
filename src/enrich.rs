//! Full-content enrichment of matched articles.
//!
//! Runs after the scan, one article at a time. A failed or empty fetch
//! leaves that article's content unset; the rest of the batch continues.

use futures::stream::{self, StreamExt};
use std::error::Error;
use tracing::{debug, info, instrument, warn};

use crate::models::{ArticleSummary, MatchedArticle};

/// Anything that can return the body markup of one article.
pub trait ContentSource {
    /// `Ok(None)` means the page was fetched but had no recognisable body.
    async fn fetch_content(&self, link: &str) -> Result<Option<String>, Box<dyn Error>>;
}

/// Fetch the body of every matched article, in order.
#[instrument(level = "info", skip_all, fields(count = articles.len()))]
pub async fn enrich_articles<C: ContentSource>(
    source: &C,
    articles: Vec<ArticleSummary>,
) -> Vec<MatchedArticle> {
    let enriched: Vec<MatchedArticle> = stream::iter(articles)
        .then(|summary| async move {
            info!(title = %summary.title, "Fetching full content");
            let content = match source.fetch_content(&summary.link).await {
                Ok(Some(markup)) => {
                    debug!(link = %summary.link, bytes = markup.len(), "Fetched article content");
                    Some(markup)
                }
                Ok(None) => {
                    warn!(link = %summary.link, "Article page has no content area");
                    None
                }
                Err(e) => {
                    warn!(link = %summary.link, error = %e, "Article content fetch failed");
                    None
                }
            };
            MatchedArticle { summary, content }
        })
        .collect()
        .await;

    let with_content = enriched.iter().filter(|a| a.content.is_some()).count();
    info!(
        total = enriched.len(),
        with_content,
        "Finished content enrichment"
    );
    enriched
}
