//! Section-aware parser for samplesheet files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use super::document::{Document, SectionContent, SectionKind};
use super::source::SourceInfo;
use crate::error::{Result, SscheckError};

/// Parser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Boilerplate lines to drop before parsing.
    pub skip_lines: usize,
    /// Sections whose body is a column header followed by rows.
    pub tabular_sections: Vec<String>,
    /// Sections whose body is a plain list of values.
    pub array_sections: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            skip_lines: 0,
            tabular_sections: Vec::new(),
            array_sections: Vec::new(),
        }
    }
}

impl ParserConfig {
    /// Mark sections as tabular.
    pub fn with_tabular<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tabular_sections.extend(names.into_iter().map(Into::into));
        self
    }

    /// Mark sections as arrays.
    pub fn with_array<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.array_sections.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set the number of leading lines to skip.
    pub fn with_skip_lines(mut self, skip_lines: usize) -> Self {
        self.skip_lines = skip_lines;
        self
    }

    /// Set the delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Kind a section body is read as. Tabular wins over array.
    pub fn kind_of(&self, section: &str) -> SectionKind {
        if self.tabular_sections.iter().any(|s| s == section) {
            SectionKind::Table
        } else if self.array_sections.iter().any(|s| s == section) {
            SectionKind::Array
        } else {
            SectionKind::Record
        }
    }
}

/// Parses sectioned delimited files into a [`Document`].
pub struct SectionParser {
    config: ParserConfig,
}

impl SectionParser {
    /// Create a parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a file and return the document and source metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Document, SourceInfo)> {
        let path = path.as_ref();

        let contents = fs::read(path).map_err(|e| SscheckError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let document = self.parse_bytes(&contents)?;
        debug!(
            path = %path.display(),
            sections = document.len(),
            "parsed samplesheet"
        );

        let source = SourceInfo::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            document.len(),
        );

        Ok((document, source))
    }

    /// Parse in-memory text.
    pub fn parse_str(&self, text: &str) -> Result<Document> {
        self.parse_bytes(text.as_bytes())
    }

    /// Parse raw bytes.
    ///
    /// Every physical line is split on the delimiter as is. Quote
    /// characters are ordinary cell text and never span lines.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Document> {
        let body = skip_lines(bytes, self.config.skip_lines);

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(body);

        let mut document = Document::new();
        let mut open: Option<OpenSection> = None;

        for result in reader.records() {
            let record = result?;
            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or_default()
                + self.config.skip_lines;

            // Lines made only of delimiters are section breaks.
            if record.iter().all(str::is_empty) {
                continue;
            }

            let fields: Vec<String> = record.iter().map(str::to_string).collect();

            if fields[0].starts_with('[') {
                let name = section_name(&fields[0], line)?;
                if let Some(section) = open.take() {
                    section.close(&mut document, line)?;
                }
                if document.contains(&name) {
                    return Err(SscheckError::Format {
                        line,
                        message: format!("section [{}] appears more than once", name),
                    });
                }
                let kind = self.config.kind_of(&name);
                debug!(section = %name, kind = kind.label(), line, "opened section");
                open = Some(OpenSection::new(name, kind, line));
                continue;
            }

            match open.as_mut() {
                Some(section) => section.push(fields),
                None => {
                    return Err(SscheckError::Format {
                        line,
                        message: "data found before any section header".to_string(),
                    });
                }
            }
        }

        if let Some(section) = open.take() {
            let line = section.line;
            section.close(&mut document, line)?;
        }

        Ok(document)
    }
}

impl Default for SectionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// The section currently receiving data lines.
struct OpenSection {
    name: String,
    content: SectionContent,
    awaiting_columns: bool,
    line: usize,
}

impl OpenSection {
    fn new(name: String, kind: SectionKind, line: usize) -> Self {
        Self {
            name,
            content: SectionContent::empty(kind),
            awaiting_columns: kind == SectionKind::Table,
            line,
        }
    }

    fn push(&mut self, fields: Vec<String>) {
        match &mut self.content {
            SectionContent::Table(table) => {
                if self.awaiting_columns {
                    table.columns = fields;
                    self.awaiting_columns = false;
                } else {
                    table.push_values(fields);
                }
            }
            SectionContent::Array(values) => {
                values.push(fields.into_iter().next().unwrap_or_default());
            }
            SectionContent::Record(record) => {
                let mut tokens = fields.into_iter();
                let key = tokens.next().unwrap_or_default();
                let value = tokens.next().unwrap_or_default();
                if let Some(previous) = record.insert(key.clone(), value) {
                    warn!(
                        section = %self.name,
                        key = %key,
                        previous = %previous,
                        "repeated key, keeping the last value"
                    );
                }
            }
        }
    }

    fn close(self, document: &mut Document, line: usize) -> Result<()> {
        if document.insert(self.name.clone(), self.content) {
            Ok(())
        } else {
            Err(SscheckError::Format {
                line,
                message: format!("section [{}] appears more than once", self.name),
            })
        }
    }
}

/// Extract the name between `[` and `]`.
fn section_name(token: &str, line: usize) -> Result<String> {
    let inner = &token.trim()[1..];
    match inner.find(']') {
        Some(end) if end > 0 => Ok(inner[..end].to_string()),
        _ => Err(SscheckError::Format {
            line,
            message: format!("malformed section header '{}'", token),
        }),
    }
}

/// Return the input after its first `count` lines.
fn skip_lines(bytes: &[u8], count: usize) -> &[u8] {
    let mut rest = bytes;
    for _ in 0..count {
        match rest.iter().position(|&b| b == b'\n') {
            Some(pos) => rest = &rest[pos + 1..],
            None => return &[],
        }
    }
    rest
}
