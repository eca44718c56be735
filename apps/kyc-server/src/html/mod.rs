//! HTML rendering module
//!
//! Server-side pages for the browser flow:
//! - Upload form
//! - Analysis report (status messages, field table, risk sections)
//! - Error page
//!
//! All provider output is escaped with `html-escape` before it is embedded.

mod render;

pub use render::{render_error_page, render_report_page, render_upload_page};
