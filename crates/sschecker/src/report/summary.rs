//! Serializable outcome of a driver run.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::driver::Mode;
use crate::error::{Result, SscheckError};
use crate::input::{Record, SourceInfo};
use crate::sheet::{Role, SampleSheet};
use crate::validation::{IndexMismatch, PairingReport, ValidationResult};

/// Schema validation outcome of one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageReport {
    pub role: Role,
    /// Section name in the checked sheet.
    pub section: String,
    pub result: ValidationResult,
}

/// Report of a samplesheet that passed every fatal check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// The checked file, when the sheet was loaded from disk.
    pub source: Option<SourceInfo>,
    /// Name of the profile the sheet was read with.
    pub profile: String,
    pub mode: Mode,
    /// Header and site metadata merged into one record.
    pub run_info: Record,
    /// Sections in the order they were validated.
    pub stages: Vec<StageReport>,
    /// Pairing and uniqueness findings of the data section.
    pub pairing: Option<PairingReport>,
    /// Index values missing from the registry, if one was given.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub index_mismatches: Vec<IndexMismatch>,
    /// Findings downgraded by the run mode.
    pub warnings: Vec<String>,
    pub checked_at: DateTime<Utc>,
}

impl ValidationReport {
    pub(crate) fn new(sheet: &SampleSheet, mode: Mode) -> Self {
        Self {
            source: sheet.source().cloned(),
            profile: sheet.profile().name.clone(),
            mode,
            run_info: Record::new(),
            stages: Vec::new(),
            pairing: None,
            index_mismatches: Vec::new(),
            warnings: Vec::new(),
            checked_at: Utc::now(),
        }
    }

    /// Outcome for a role, if that section was checked.
    pub fn stage(&self, role: Role) -> Option<&StageReport> {
        self.stages.iter().find(|stage| stage.role == role)
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Write the report as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| SscheckError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let file = File::create(path).map_err(|e| SscheckError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;

        Ok(())
    }

    /// Read a report written by [`ValidationReport::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SscheckError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let report = serde_json::from_reader(BufReader::new(file))?;
        Ok(report)
    }
}
