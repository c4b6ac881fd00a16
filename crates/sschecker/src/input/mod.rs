//! Input parsing and document model.

mod document;
mod parser;
mod source;

pub use document::{Document, MISSING_VALUE, Record, Row, SectionContent, SectionKind, Table};
pub use parser::{ParserConfig, SectionParser};
pub use source::SourceInfo;
