//! Output formatting for non-interactive modes.

mod report;

pub use report::{Report, ReportOutput};
