//! Daktilo1984 listing and article scraper.
//!
//! The site is a WordPress theme: listing pages show `article.l-post` cards
//! and link to the next page with `a.next.page-numbers`; article pages keep
//! the body in `div.entry-content`.
//!
//! Parsing is split from fetching so the selectors can be tested against
//! fixture markup.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::error::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::config::{FALLBACK_AUTHOR, USER_AGENT};
use crate::dates;
use crate::enrich::ContentSource;
use crate::models::{ArticleSummary, ListingPage};
use crate::scanner::ListingSource;
use crate::scrapers::markup::clean_content;

static ARTICLE: Lazy<Selector> = Lazy::new(|| selector("article.l-post"));
static TITLE: Lazy<Selector> = Lazy::new(|| selector("h2.post-title"));
static TITLE_LINK: Lazy<Selector> = Lazy::new(|| selector("a[href]"));
static AUTHOR: Lazy<Selector> = Lazy::new(|| selector("span.post-author"));
static DATE: Lazy<Selector> = Lazy::new(|| selector("time.post-date"));
static IMAGE: Lazy<Selector> = Lazy::new(|| selector("span.img[data-bgsrc]"));
static EXCERPT: Lazy<Selector> = Lazy::new(|| selector("div.excerpt"));
static NEXT_PAGE: Lazy<Selector> = Lazy::new(|| selector("a.next.page-numbers[href]"));
static CONTENT: Lazy<Selector> = Lazy::new(|| selector("div.entry-content"));

/// WordPress thumbnail suffix, e.g. `photo-300x200.jpg`.
static SIZE_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-\d+x\d+(\.\w+)$").expect("valid size suffix pattern"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid CSS selector")
}

/// Whitespace-trimmed text of an element, pieces joined by single spaces.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn first_text(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    card.select(selector).next().map(element_text)
}

/// Point a thumbnail URL at the full-size original.
pub fn full_size_image(url: &str) -> String {
    SIZE_SUFFIX.replace(url, "$1").into_owned()
}

fn parse_card(card: ElementRef<'_>, page_url: &Url, today: NaiveDate) -> Option<ArticleSummary> {
    let title_node = card.select(&TITLE).next()?;
    let href = title_node.select(&TITLE_LINK).next()?.value().attr("href")?;
    let link = match page_url.join(href) {
        Ok(resolved) => resolved.to_string(),
        Err(e) => {
            warn!(%href, error = %e, "Unresolvable article link");
            return None;
        }
    };

    let image_url = card
        .select(&IMAGE)
        .next()
        .and_then(|node| node.value().attr("data-bgsrc"))
        .map(full_size_image)
        .unwrap_or_default();

    Some(ArticleSummary {
        title: element_text(title_node),
        link,
        author: first_text(card, &AUTHOR).unwrap_or_else(|| FALLBACK_AUTHOR.to_string()),
        date: first_text(card, &DATE).unwrap_or_else(|| dates::format_display(today)),
        image_url,
        excerpt: first_text(card, &EXCERPT).unwrap_or_default(),
    })
}

/// Extract the article cards and next-page pointer from a listing page.
///
/// Cards without a title link are skipped. A card without a date is given
/// `today` so it still takes part in the scan; the fallback is written in
/// the listing's own Turkish display form so it parses like any other card.
pub fn parse_listing(html: &str, page_url: &Url, today: NaiveDate) -> ListingPage {
    let document = Html::parse_document(html);

    let mut records = Vec::new();
    for card in document.select(&ARTICLE) {
        match parse_card(card, page_url, today) {
            Some(record) => records.push(record),
            None => debug!(page = %page_url, "Skipping card without title link"),
        }
    }

    let next_page = document
        .select(&NEXT_PAGE)
        .next()
        .and_then(|a| a.value().attr("href"))
        .and_then(|href| page_url.join(href).ok())
        .map(|u| u.to_string());

    ListingPage { records, next_page }
}

/// Extract the cleaned body markup of an article page.
pub fn extract_content(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    document.select(&CONTENT).next().map(clean_content)
}

/// HTTP adapter for the live site.
#[derive(Debug, Clone)]
pub struct DaktiloSite {
    client: Client,
}

impl DaktiloSite {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    async fn get_text(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

impl ListingSource for DaktiloSite {
    #[instrument(level = "info", skip(self))]
    async fn fetch_page(&self, url: &str) -> Result<ListingPage, Box<dyn Error>> {
        let page_url = Url::parse(url)?;
        let html = self.get_text(url).await?;
        let page = parse_listing(&html, &page_url, Local::now().date_naive());
        info!(
            records = page.records.len(),
            has_next = page.next_page.is_some(),
            "Parsed listing page"
        );
        Ok(page)
    }
}

impl ContentSource for DaktiloSite {
    #[instrument(level = "info", skip(self))]
    async fn fetch_content(&self, link: &str) -> Result<Option<String>, Box<dyn Error>> {
        let html = self.get_text(link).await?;
        Ok(extract_content(&html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
<html><body>
  <article class="l-post grid-post">
    <span class="img" data-bgsrc="https://daktilo1984.com/wp-content/uploads/kapak-300x200.jpg"></span>
    <h2 class="post-title"><a href="https://daktilo1984.com/daktilo2/ilk-yazi/">İlk Yazı</a></h2>
    <span class="post-author"> Ayşe Yılmaz </span>
    <time class="post-date">14 Aralık 2025</time>
    <div class="excerpt"><p>Kısa özet.</p></div>
  </article>
  <article class="l-post">
    <h2 class="post-title"><a href="/daktilo2/ikinci-yazi/">İkinci Yazı</a></h2>
  </article>
  <article class="l-post">
    <h2 class="post-title">Bağlantısız</h2>
  </article>
  <nav><a class="next page-numbers" href="/daktilo2/page/2/">Sonraki</a></nav>
</body></html>
"#;

    fn page_url() -> Url {
        Url::parse("https://daktilo1984.com/daktilo2/").unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 15).unwrap()
    }

    #[test]
    fn test_parse_listing_cards() {
        let page = parse_listing(LISTING, &page_url(), today());

        assert_eq!(page.records.len(), 2);
        let first = &page.records[0];
        assert_eq!(first.title, "İlk Yazı");
        assert_eq!(first.link, "https://daktilo1984.com/daktilo2/ilk-yazi/");
        assert_eq!(first.author, "Ayşe Yılmaz");
        assert_eq!(first.date, "14 Aralık 2025");
        assert_eq!(
            first.image_url,
            "https://daktilo1984.com/wp-content/uploads/kapak.jpg"
        );
        assert_eq!(first.excerpt, "Kısa özet.");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let page = parse_listing(LISTING, &page_url(), today());

        let second = &page.records[1];
        assert_eq!(second.link, "https://daktilo1984.com/daktilo2/ikinci-yazi/");
        assert_eq!(second.author, FALLBACK_AUTHOR);
        assert_eq!(second.date, "15 Aralık 2025");
        assert_eq!(second.published_on(), Some(today()));
        assert_eq!(second.image_url, "");
        assert_eq!(second.excerpt, "");
    }

    #[test]
    fn test_next_page_is_resolved() {
        let page = parse_listing(LISTING, &page_url(), today());
        assert_eq!(
            page.next_page.as_deref(),
            Some("https://daktilo1984.com/daktilo2/page/2/")
        );
    }

    #[test]
    fn test_last_page_has_no_next() {
        let page = parse_listing("<html><body></body></html>", &page_url(), today());
        assert!(page.records.is_empty());
        assert!(page.next_page.is_none());
    }

    #[test]
    fn test_full_size_image() {
        assert_eq!(full_size_image("https://x/a-1024x768.png"), "https://x/a.png");
        assert_eq!(full_size_image("https://x/a.png"), "https://x/a.png");
        assert_eq!(full_size_image("https://x/a-300x200-b.jpg"), "https://x/a-300x200-b.jpg");
    }

    #[test]
    fn test_extract_content() {
        let html = r#"<html><body><div class="entry-content"><p>Gövde</p><script>x()</script></div></body></html>"#;
        assert_eq!(
            extract_content(html).as_deref(),
            Some(r#"<div class="entry-content"><p>Gövde</p></div>"#)
        );
        assert_eq!(extract_content("<html><body><p>yok</p></body></html>"), None);
    }
}
