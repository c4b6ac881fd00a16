//! Parsed samplesheet document and its section shapes.

use std::io::Write;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SscheckError};

/// Value used to pad table rows that are shorter than the column header.
pub const MISSING_VALUE: &str = "NA";

/// A flat key/value section such as `[Header]` or `[Reads]`.
pub type Record = IndexMap<String, String>;

/// One data row of a tabular section, keyed by column name.
pub type Row = IndexMap<String, String>;

/// A tabular section: a column-header line followed by data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column names in file order.
    pub columns: Vec<String>,
    /// Data rows; every row holds exactly one value per column.
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a table with the given columns and no rows.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row of raw values.
    ///
    /// Short rows are padded with [`MISSING_VALUE`]; values beyond the
    /// last column are dropped.
    pub fn push_values(&mut self, mut values: Vec<String>) {
        if values.len() < self.columns.len() {
            values.resize(self.columns.len(), MISSING_VALUE.to_string());
        }
        let row: Row = self.columns.iter().cloned().zip(values).collect();
        self.rows.push(row);
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check whether a column exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Get all values of a column in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        if !self.has_column(name) {
            return None;
        }
        Some(
            self.rows
                .iter()
                .map(|row| row.get(name).map(String::as_str).unwrap_or(MISSING_VALUE))
                .collect(),
        )
    }
}

/// Shape of a section, chosen per dialect before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// `key,value` lines.
    Record,
    /// Column header followed by rows.
    Table,
    /// One value per line.
    Array,
}

impl SectionKind {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Record => "record",
            SectionKind::Table => "table",
            SectionKind::Array => "array",
        }
    }
}

/// Content of one named section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum SectionContent {
    Record(Record),
    Table(Table),
    Array(Vec<String>),
}

impl SectionContent {
    /// Create empty content of the given kind.
    pub fn empty(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Record => SectionContent::Record(Record::new()),
            SectionKind::Table => SectionContent::Table(Table::default()),
            SectionKind::Array => SectionContent::Array(Vec::new()),
        }
    }

    /// The shape of this content.
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionContent::Record(_) => SectionKind::Record,
            SectionContent::Table(_) => SectionKind::Table,
            SectionContent::Array(_) => SectionKind::Array,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            SectionContent::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            SectionContent::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[String]> {
        match self {
            SectionContent::Array(values) => Some(values),
            _ => None,
        }
    }
}

/// A parsed samplesheet: named sections in order of appearance.
///
/// Documents are built once by the parser and not modified afterwards,
/// apart from [`Document::take`] which moves sections out when projecting
/// into a [`crate::sheet::SampleSheet`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    sections: IndexMap<String, SectionContent>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a section. Returns false if the name is already taken.
    pub(crate) fn insert(&mut self, name: String, content: SectionContent) -> bool {
        if self.sections.contains_key(&name) {
            return false;
        }
        self.sections.insert(name, content);
        true
    }

    /// Get a section by name.
    pub fn get(&self, name: &str) -> Option<&SectionContent> {
        self.sections.get(name)
    }

    /// Check whether a section exists.
    pub fn contains(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Section names in order of appearance.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Iterate over sections in order of appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SectionContent)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Move a section out of the document.
    pub fn take(&mut self, name: &str) -> Option<SectionContent> {
        self.sections.shift_remove(name)
    }

    /// Write the document back out in the sectioned delimited format.
    ///
    /// Cells are written unquoted, one line per row. Parsing the output with
    /// the same delimiter and section kinds yields an equal document, with
    /// one exception: empty array entries have no line form and are not
    /// written. Cell text containing the delimiter or a line break does not
    /// survive either, but the parser never produces such text.
    pub fn write_delimited<W: Write>(&self, writer: W, delimiter: u8) -> Result<()> {
        let mut out = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(writer);

        for (name, content) in &self.sections {
            out.write_record([format!("[{}]", name)])?;
            match content {
                SectionContent::Record(record) => {
                    for (key, value) in record {
                        out.write_record([key, value])?;
                    }
                }
                SectionContent::Table(table) => {
                    out.write_record(&table.columns)?;
                    for row in &table.rows {
                        // Repeated column names share one row entry.
                        out.write_record(table.columns.iter().map(|column| {
                            row.get(column).map(String::as_str).unwrap_or(MISSING_VALUE)
                        }))?;
                    }
                }
                SectionContent::Array(values) => {
                    for value in values.iter().filter(|v| !v.is_empty()) {
                        out.write_record([value])?;
                    }
                }
            }
        }

        out.flush().map_err(|e| SscheckError::Csv(e.into()))?;
        Ok(())
    }
}
