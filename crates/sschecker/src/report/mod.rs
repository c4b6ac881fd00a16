//! Report driver, run modes and report output.

mod driver;
pub mod render;
mod summary;

pub use driver::{Mode, ReportDriver};
pub use summary::{StageReport, ValidationReport};
