//! Role-based access to the sections of a parsed sheet.

use std::path::Path;

use indexmap::IndexMap;

use super::profile::{Role, SheetProfile};
use crate::error::{Result, SscheckError};
use crate::input::{Document, Record, SectionContent, SectionParser, SourceInfo, Table};

/// A parsed sheet with its sections resolved by role.
///
/// Construction moves every section the profile names out of the
/// [`Document`]; sections the profile does not mention are dropped.
#[derive(Debug, Clone)]
pub struct SampleSheet {
    profile: SheetProfile,
    sections: IndexMap<Role, SectionContent>,
    source: Option<SourceInfo>,
}

impl SampleSheet {
    /// Project a parsed document onto a profile.
    ///
    /// Fails with [`SscheckError::MissingSection`] for the first section the
    /// profile requires that the document lacks.
    pub fn from_document(mut document: Document, profile: &SheetProfile) -> Result<Self> {
        profile.check_sections()?;
        let mut sections = IndexMap::new();

        for (&role, name) in &profile.sections {
            let content = document
                .take(name)
                .ok_or_else(|| SscheckError::MissingSection {
                    section: name.clone(),
                })?;

            if content.kind() != role.kind() {
                return Err(SscheckError::Config(format!(
                    "section [{}] was read as a {} but the {} role needs a {}",
                    name,
                    content.kind().label(),
                    role.label(),
                    role.kind().label()
                )));
            }
            sections.insert(role, content);
        }

        Ok(Self {
            profile: profile.clone(),
            sections,
            source: None,
        })
    }

    /// Parse a file with the profile's parser settings and project it.
    pub fn load(path: impl AsRef<Path>, profile: &SheetProfile) -> Result<Self> {
        let parser = SectionParser::with_config(profile.parser_config()?);
        let (document, source) = parser.parse_file(path)?;
        let mut sheet = Self::from_document(document, profile)?;
        sheet.source = Some(source);
        Ok(sheet)
    }

    /// The profile this sheet was resolved with.
    pub fn profile(&self) -> &SheetProfile {
        &self.profile
    }

    /// Metadata of the file the sheet was loaded from, if any.
    pub fn source(&self) -> Option<&SourceInfo> {
        self.source.as_ref()
    }

    /// Whether the profile defines this role.
    pub fn has_role(&self, role: Role) -> bool {
        self.sections.contains_key(&role)
    }

    /// Section name backing a role, falling back to the role label.
    pub fn section_name(&self, role: Role) -> &str {
        self.profile.section_name(role).unwrap_or(role.label())
    }

    fn section(&self, role: Role) -> Result<&SectionContent> {
        self.sections
            .get(&role)
            .ok_or_else(|| SscheckError::MissingSection {
                section: self.section_name(role).to_string(),
            })
    }

    /// Get a record section by role.
    pub fn record(&self, role: Role) -> Result<&Record> {
        self.section(role)?.as_record().ok_or_else(|| {
            SscheckError::Config(format!("[{}] is not a record section", self.section_name(role)))
        })
    }

    /// Get a tabular section by role.
    pub fn table(&self, role: Role) -> Result<&Table> {
        self.section(role)?.as_table().ok_or_else(|| {
            SscheckError::Config(format!("[{}] is not a tabular section", self.section_name(role)))
        })
    }

    pub fn header(&self) -> Result<&Record> {
        self.record(Role::Header)
    }

    pub fn reads(&self) -> Result<&Record> {
        self.record(Role::Reads)
    }

    pub fn settings(&self) -> Result<&Record> {
        self.record(Role::Settings)
    }

    pub fn site(&self) -> Result<&Record> {
        self.record(Role::Site)
    }

    /// The per-sample table.
    pub fn data(&self) -> Result<&Table> {
        self.table(Role::Data)
    }

    pub fn bclconvert_settings(&self) -> Result<&Record> {
        self.record(Role::BclconvertSettings)
    }

    pub fn bclconvert_data(&self) -> Result<&Table> {
        self.table(Role::BclconvertData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ParserConfig;

    const SHEET: &str = "\
[Header]
RunName,240101_01
[Reads]
Read1Cycles,101
[Settings]
AdapterBehavior,trim
[Data]
Index_ID,index,index2
UDP0001,ACGT,TTGA
";

    fn registry_document() -> Document {
        SectionParser::with_config(ParserConfig::default().with_tabular(["Data"]))
            .parse_str(SHEET)
            .unwrap()
    }

    #[test]
    fn test_resolve_registry_profile() {
        let sheet =
            SampleSheet::from_document(registry_document(), &SheetProfile::index_registry())
                .unwrap();

        assert_eq!(
            sheet.header().unwrap().get("RunName").map(String::as_str),
            Some("240101_01")
        );
        assert_eq!(sheet.data().unwrap().column("index"), Some(vec!["ACGT"]));
        assert!(!sheet.has_role(Role::Site));
    }

    #[test]
    fn test_missing_section() {
        let err = SampleSheet::from_document(registry_document(), &SheetProfile::tso500())
            .unwrap_err();
        assert!(matches!(
            err,
            SscheckError::MissingSection { ref section } if section == "TSO500S_Settings"
        ));
    }

    #[test]
    fn test_role_absent_from_profile() {
        let sheet =
            SampleSheet::from_document(registry_document(), &SheetProfile::index_registry())
                .unwrap();
        assert!(matches!(
            sheet.site(),
            Err(SscheckError::MissingSection { ref section }) if section == "Site"
        ));
    }

    #[test]
    fn test_wrong_section_shape() {
        let doc = SectionParser::new().parse_str(SHEET).unwrap();
        let err = SampleSheet::from_document(doc, &SheetProfile::index_registry()).unwrap_err();
        assert!(matches!(err, SscheckError::Config(_)));
    }

    #[test]
    fn test_shared_section_name_is_config_error() {
        let profile = SheetProfile::index_registry().with_section(Role::Site, "Header");
        let err = SampleSheet::from_document(registry_document(), &profile).unwrap_err();
        assert!(matches!(err, SscheckError::Config(_)));
    }
}
