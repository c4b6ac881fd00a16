//! sschecker: section-aware parser and schema validator for sequencing
//! samplesheets.
//!
//! A samplesheet is a comma-delimited file split into `[Section]` blocks:
//! key/value records such as `[Header]` and `[Reads]`, and per-sample
//! tables such as `[TSO500S_Data]`. Checking runs in two steps:
//!
//! 1. [`input::SectionParser`] reads the file into a [`input::Document`],
//!    and [`sheet::SampleSheet`] resolves its sections by role using a
//!    [`sheet::SheetProfile`].
//! 2. [`report::ReportDriver`] validates each section against its
//!    [`schema::Schema`], then checks sample pairing, index ordering and,
//!    when a registry is given, index membership.
//!
//! # Example
//!
//! ```no_run
//! use sschecker::Checker;
//!
//! let checker = Checker::new().unwrap();
//! let report = checker
//!     .check("SampleSheet.csv", None, &mut std::io::stdout())
//!     .unwrap();
//!
//! println!("Sections checked: {}", report.stages.len());
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod schema;
pub mod sheet;
pub mod validation;

mod checker;

pub use crate::checker::Checker;
pub use config::CheckerConfig;
pub use error::{Result, SscheckError};
pub use input::{Document, SectionParser, SourceInfo};
pub use report::{Mode, ReportDriver, ValidationReport};
pub use schema::{Rule, Schema, SchemaSet};
pub use sheet::{Role, SampleSheet, SheetProfile};
pub use validation::{ValidationResult, validate};
