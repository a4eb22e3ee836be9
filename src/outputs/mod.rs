//! Output generation for the assembled issue.
//!
//! # Submodules
//!
//! - [`html`]: Renders [`IssueData`](crate::models::IssueData) as a standalone HTML page
//! - [`json`]: Writes the same render-ready structure as JSON for external templates
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! └── 7Aralık25-daktilo2.html   # named after the issue date
//! ```

pub mod html;
pub mod json;
