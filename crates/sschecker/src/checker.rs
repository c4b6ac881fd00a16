//! Main Checker struct and public API.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::config::CheckerConfig;
use crate::error::Result;
use crate::report::{Mode, ReportDriver, ValidationReport};
use crate::sheet::SampleSheet;

/// Loads samplesheets with the configured profiles and runs every check.
pub struct Checker {
    config: CheckerConfig,
    mode: Mode,
}

impl Checker {
    /// Create a checker with the built-in TSO500 configuration.
    pub fn new() -> Result<Self> {
        Ok(Self::with_config(CheckerConfig::tso500()?))
    }

    pub fn with_config(config: CheckerConfig) -> Self {
        Self {
            config,
            mode: Mode::default(),
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Read a samplesheet with the samplesheet profile.
    pub fn load_samplesheet(&self, path: impl AsRef<Path>) -> Result<SampleSheet> {
        SampleSheet::load(path, &self.config.samplesheet)
    }

    /// Read an index registry with the registry profile.
    pub fn load_registry(&self, path: impl AsRef<Path>) -> Result<SampleSheet> {
        SampleSheet::load(path, &self.config.index_registry)
    }

    /// Check the samplesheet at `path`, optionally against an index registry,
    /// writing progress to `out`.
    pub fn check<W: Write>(
        &self,
        path: impl AsRef<Path>,
        registry: Option<&Path>,
        out: &mut W,
    ) -> Result<ValidationReport> {
        let path = path.as_ref();
        info!(path = %path.display(), "checking samplesheet");

        let sheet = self.load_samplesheet(path)?;
        let registry = registry.map(|p| self.load_registry(p)).transpose()?;

        ReportDriver::new(&self.config, self.mode).run(&sheet, registry.as_ref(), out)
    }
}
