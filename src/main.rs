//! # Daktilo Weekly
//!
//! Builds one weekly issue of the Daktilo2 magazine from the articles the
//! site published on a single day.
//!
//! ## Usage
//!
//! ```sh
//! daktilo_weekly "07 Aralık 2025"
//! ```
//!
//! ## Architecture
//!
//! 1. **Scanning**: walk the paginated listing newest-first and collect the
//!    articles dated on the target day (or the newest day, if none is given)
//! 2. **Enrichment**: fetch the full body of every matched article
//! 3. **Assembly**: assign headline, sidebar and bottom roles and number the issue
//! 4. **Output**: write `<day><month><yy>-daktilo2.html`, optionally a JSON copy

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod assembler;
mod cli;
mod config;
mod dates;
mod enrich;
mod models;
mod numbering;
mod outputs;
mod scanner;
mod scrapers;
mod utils;

use cli::Cli;
use outputs::{html, json};
use scrapers::daktilo::DaktiloSite;
use utils::{ensure_writable_dir, prompt_for_date};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("daktilo_weekly starting up");

    let args = Cli::parse();
    let start_url = args.start_url();
    debug!(%start_url, ?args.output_dir, max_pages = args.max_pages, "Parsed CLI arguments");

    let output_dir = match args.output_dir.clone() {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    if let Err(e) = ensure_writable_dir(&output_dir).await {
        error!(path = %output_dir.display(), error = %e, "Output directory is not writable");
        return Err(e);
    }

    // ---- Target date ----
    let mut requested_date = args.requested_date();
    if requested_date.is_none() && !args.no_prompt {
        match prompt_for_date("07 Aralık 2025") {
            Ok(answer) => requested_date = answer,
            Err(e) => warn!(error = %e, "Date prompt failed; defaulting to most recent"),
        }
    }

    // ---- Scan ----
    let site = DaktiloSite::new()?;
    let outcome = scanner::scan(&site, &start_url, requested_date.as_deref(), args.max_pages).await;

    debug!(pages = outcome.pages_scanned, stop = ?outcome.stop, "Scan outcome");
    let Some(issue_date) = outcome.target_text().map(str::to_string) else {
        warn!(stop = ?outcome.stop, "No articles found");
        return Ok(());
    };
    if outcome.is_not_found() {
        warn!(%issue_date, stop = ?outcome.stop, "No articles found for date");
        return Ok(());
    }

    // ---- Enrich & assemble ----
    let articles = enrich::enrich_articles(&site, outcome.matches).await;
    let issue = match assembler::assemble(articles, &issue_date, outcome.issue_number) {
        Ok(issue) => issue,
        Err(e) => {
            error!(error = %e, "Cannot assemble issue");
            return Err(e.into());
        }
    };

    // ---- Output ----
    let path: PathBuf = html::write_issue(&issue, &output_dir).await?;
    info!(path = %path.display(), "Magazine generated successfully");

    if let Some(json_path) = &args.json_output {
        if let Err(e) = json::write_issue_json(&issue, json_path).await {
            error!(path = %json_path.display(), error = %e, "Failed to write issue JSON");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        issue_number = issue.issue_number,
        articles = issue.full_articles.len(),
        "Execution complete"
    );

    Ok(())
}
