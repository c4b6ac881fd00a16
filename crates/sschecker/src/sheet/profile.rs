//! Section roles and per-dialect section naming.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SscheckError};
use crate::input::{ParserConfig, SectionKind};

/// Logical purpose of a section, independent of what a dialect calls it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Run metadata.
    Header,
    /// Read and index cycle counts.
    Reads,
    /// Analysis settings.
    Settings,
    /// Sequencing site and instrument.
    Site,
    /// Per-sample table.
    Data,
    /// BCL Convert settings.
    BclconvertSettings,
    /// BCL Convert per-sample table.
    BclconvertData,
}

impl Role {
    /// All roles in validation order.
    pub const ALL: [Role; 7] = [
        Role::Header,
        Role::Reads,
        Role::Settings,
        Role::Site,
        Role::Data,
        Role::BclconvertSettings,
        Role::BclconvertData,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Header => "Header",
            Role::Reads => "Reads",
            Role::Settings => "Settings",
            Role::Site => "Site",
            Role::Data => "Data",
            Role::BclconvertSettings => "BCLConvert Settings",
            Role::BclconvertData => "BCLConvert Data",
        }
    }

    /// Whether report lines read "are valid" rather than "is valid".
    pub fn is_plural(&self) -> bool {
        matches!(
            self,
            Role::Reads | Role::Settings | Role::BclconvertSettings
        )
    }

    /// Shape the section is expected to have.
    pub fn kind(&self) -> SectionKind {
        match self {
            Role::Data | Role::BclconvertData => SectionKind::Table,
            _ => SectionKind::Record,
        }
    }
}

/// Section names and parsing options for one samplesheet dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetProfile {
    /// Dialect name shown in reports.
    pub name: String,
    /// Section name used for each role, in validation order.
    pub sections: IndexMap<Role, String>,
    /// Extra sections read as plain value lists.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub array_sections: Vec<String>,
    /// Boilerplate lines before the first section.
    #[serde(default)]
    pub skip_lines: usize,
    /// Field delimiter.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

fn default_delimiter() -> char {
    ','
}

impl SheetProfile {
    /// Create a profile with no sections.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sections: IndexMap::new(),
            array_sections: Vec::new(),
            skip_lines: 0,
            delimiter: default_delimiter(),
        }
    }

    /// Map a role to a section name.
    pub fn with_section(mut self, role: Role, name: impl Into<String>) -> Self {
        self.sections.insert(role, name.into());
        self
    }

    /// TSO500 run samplesheet with site and BCL Convert blocks.
    pub fn tso500() -> Self {
        Self::new("TSO500 samplesheet")
            .with_section(Role::Header, "Header")
            .with_section(Role::Reads, "Reads")
            .with_section(Role::Settings, "TSO500S_Settings")
            .with_section(Role::Site, "NSWHP")
            .with_section(Role::Data, "TSO500S_Data")
            .with_section(Role::BclconvertSettings, "BCLConvert_Settings")
            .with_section(Role::BclconvertData, "BCLConvert_Data")
    }

    /// Index/chemistry registry listing the valid index sequences.
    pub fn index_registry() -> Self {
        Self::new("index registry")
            .with_section(Role::Header, "Header")
            .with_section(Role::Reads, "Reads")
            .with_section(Role::Settings, "Settings")
            .with_section(Role::Data, "Data")
    }

    /// Section name for a role.
    pub fn section_name(&self, role: Role) -> Option<&str> {
        self.sections.get(&role).map(String::as_str)
    }

    /// Reject profiles that give one section name to several roles.
    pub fn check_sections(&self) -> Result<()> {
        for (i, (role, name)) in self.sections.iter().enumerate() {
            let shared = self
                .sections
                .iter()
                .skip(i + 1)
                .find(|(_, other)| *other == name);
            if let Some((other, _)) = shared {
                return Err(SscheckError::Config(format!(
                    "profile '{}' maps both the {} and {} roles to section [{}]",
                    self.name,
                    role.label(),
                    other.label(),
                    name
                )));
            }
        }
        Ok(())
    }

    /// Parser configuration for this dialect.
    pub fn parser_config(&self) -> Result<ParserConfig> {
        if !self.delimiter.is_ascii() {
            return Err(SscheckError::Config(format!(
                "delimiter '{}' of profile '{}' is not a single ASCII character",
                self.delimiter, self.name
            )));
        }

        let tabular = self
            .sections
            .iter()
            .filter(|(role, _)| role.kind() == SectionKind::Table)
            .map(|(_, name)| name.clone());

        Ok(ParserConfig::default()
            .with_delimiter(self.delimiter as u8)
            .with_skip_lines(self.skip_lines)
            .with_tabular(tabular)
            .with_array(self.array_sections.iter().cloned()))
    }
}
