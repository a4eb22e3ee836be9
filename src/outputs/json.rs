//! JSON dump of the render-ready issue.
//!
//! Lets an external template engine render the issue from the same
//! structure the built-in HTML renderer uses.

use crate::models::IssueData;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write `issue` as pretty-printed JSON to `path`, creating parent directories.
#[instrument(level = "info", skip(issue), fields(path = %path.display()))]
pub async fn write_issue_json(issue: &IssueData, path: &Path) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(issue)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(dir = %parent.display(), error = %e, "Failed to create JSON dir");
            return Err(e.into());
        }
    }

    fs::write(path, json).await?;
    info!("Wrote issue JSON");
    Ok(())
}
