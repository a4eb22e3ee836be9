//! Small helpers shared by the outputs and the orchestrator.
//!
//! - HTML escaping for text written into markup
//! - Output directory validation
//! - The interactive date prompt (`dialoguer`)

use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Escape text for use in HTML content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then writes and removes a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let probe_path = path.join("..__probe_write__");
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Output directory is writable");
    Ok(())
}

/// Turn one line of user input into a requested date; blank means "latest".
pub fn requested_date_from_input(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Ask on the terminal for the issue date.
///
/// Returns `None` when the user just presses Enter.
#[instrument(level = "info")]
pub fn prompt_for_date(example: &str) -> Result<Option<String>, dialoguer::Error> {
    let answer: String = dialoguer::Input::new()
        .with_prompt(format!(
            "Enter the desired issue date (e.g. '{example}') or press Enter for latest"
        ))
        .allow_empty(true)
        .interact_text()?;
    Ok(requested_date_from_input(&answer))
}
