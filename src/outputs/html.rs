//! HTML rendering of an issue.
//!
//! Titles, bylines and excerpts are escaped; article bodies are already
//! cleaned markup and are inserted as-is.

use std::error::Error;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

use crate::assembler::output_filename;
use crate::models::{IssueArticle, IssueData};
use crate::utils::escape_html;

const STYLE: &str = r#"
body { font-family: Georgia, "Times New Roman", serif; max-width: 1100px; margin: 0 auto; padding: 24px; color: #1a1a1a; }
header.masthead { text-align: center; border-bottom: 3px double #1a1a1a; margin-bottom: 24px; }
header.masthead h1 { font-size: 3em; margin: 0; letter-spacing: 0.05em; }
header.masthead .issue { font-variant: small-caps; color: #555; }
.front { display: grid; grid-template-columns: 2fr 1fr; gap: 32px; }
.headline img, .sidebar img, .bottom img { max-width: 100%; height: auto; }
.intro { font-size: 1.2em; font-style: italic; }
.byline { color: #666; font-size: 0.9em; }
.bottom { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 24px; border-top: 1px solid #ccc; margin-top: 32px; padding-top: 24px; }
"#;

fn write_byline(html: &mut String, article: &IssueArticle) {
    let _ = writeln!(
        html,
        "<p class=\"byline\">{} &middot; {}</p>",
        escape_html(&article.author),
        escape_html(&article.date)
    );
}

fn write_image(html: &mut String, article: &IssueArticle) {
    if !article.image_url.is_empty() {
        let _ = writeln!(
            html,
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(&article.image_url),
            escape_html(&article.title)
        );
    }
}

fn write_article(html: &mut String, class: &str, article: &IssueArticle) {
    let _ = writeln!(html, "<article class=\"{class}\">");
    write_image(html, article);
    let _ = writeln!(
        html,
        "<h2><a href=\"{}\">{}</a></h2>",
        escape_html(&article.link),
        escape_html(&article.title)
    );
    write_byline(html, article);
    if let Some(intro) = &article.intro {
        let _ = writeln!(html, "<p class=\"intro\">{}</p>", escape_html(intro));
    }
    let _ = writeln!(html, "<div class=\"content\">\n{}\n</div>", article.content);
    html.push_str("</article>\n");
}

/// Render the whole issue as one HTML document.
pub fn render_issue(issue: &IssueData) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"tr\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(
        html,
        "<title>Daktilo2 Sayı {} &middot; {}</title>",
        issue.issue_number,
        escape_html(&issue.issue_date)
    );
    let _ = writeln!(html, "<style>{STYLE}</style>\n</head>\n<body>");

    html.push_str("<header class=\"masthead\">\n<h1>Daktilo2</h1>\n");
    let _ = writeln!(
        html,
        "<p class=\"issue\">Sayı {} &middot; {}</p>\n</header>",
        issue.issue_number,
        escape_html(&issue.issue_date)
    );

    html.push_str("<section class=\"front\">\n");
    write_article(&mut html, "headline", &issue.headline);
    if let Some(sidebar) = &issue.sidebar {
        write_article(&mut html, "sidebar", sidebar);
    }
    html.push_str("</section>\n");

    if !issue.bottom_articles.is_empty() {
        html.push_str("<section class=\"bottom\">\n");
        for article in &issue.bottom_articles {
            write_article(&mut html, "bottom-article", article);
        }
        html.push_str("</section>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Render `issue` and write it to `output_dir`, named after the issue date.
///
/// # Returns
///
/// The path of the written file.
#[instrument(level = "info", skip(issue), fields(issue_number = issue.issue_number))]
pub async fn write_issue(issue: &IssueData, output_dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    let path = output_dir.join(output_filename(&issue.issue_date));
    let html = render_issue(issue);
    fs::write(&path, html).await?;
    info!(path = %path.display(), "Wrote issue HTML");
    Ok(path)
}
