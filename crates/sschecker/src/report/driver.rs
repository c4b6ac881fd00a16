//! Drives a loaded samplesheet through every check in a fixed order.

use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};

use super::render;
use super::summary::{StageReport, ValidationReport};
use crate::config::CheckerConfig;
use crate::error::{Result, SscheckError};
use crate::input::{Record, SectionKind, Table};
use crate::sheet::{Role, SampleSheet, flatten_records};
use crate::validation::{
    ValidationResult, check_index_membership, check_pairs, unordered_columns, validate,
};

/// How strictly sample-level findings are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Every finding is fatal.
    #[default]
    Strict,
    /// Unordered index columns become warnings.
    SkipIndexOrder,
}

/// Runs the section stages and sample checks against one configuration.
///
/// Stages run in [`Role::ALL`] order and stop at the first failing section.
/// Within the data section the pairing, ordering and registry checks all
/// run before a decision is made, so a single error can report several
/// kinds of finding.
pub struct ReportDriver<'a> {
    config: &'a CheckerConfig,
    mode: Mode,
}

impl<'a> ReportDriver<'a> {
    pub fn new(config: &'a CheckerConfig, mode: Mode) -> Self {
        Self { config, mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Check `sheet`, writing progress to `out`.
    ///
    /// `registry` enables the index membership check. On success the
    /// returned report carries every stage outcome and any warnings the
    /// mode downgraded.
    pub fn run<W: Write>(
        &self,
        sheet: &SampleSheet,
        registry: Option<&SampleSheet>,
        out: &mut W,
    ) -> Result<ValidationReport> {
        let _span = info_span!("check", profile = %sheet.profile().name).entered();
        let mut report = ValidationReport::new(sheet, self.mode);
        report.run_info = run_info(sheet)?;

        for role in Role::ALL {
            if !sheet.has_role(role) {
                debug!(role = role.label(), "role not in profile, skipping");
                continue;
            }
            let section = sheet.section_name(role).to_string();
            let Some(schema) = self.config.schemas.get(role) else {
                warn!(section = %section, "no schema configured, skipping");
                continue;
            };

            render::banner(out, &format!("Validating [{}]", section))?;
            info!(section = %section, "validating section");

            let result = match role.kind() {
                SectionKind::Table => validate(sheet.table(role)?, schema),
                _ => validate(sheet.record(role)?, schema),
            };
            if !result.is_valid() {
                render::rejection(out, schema, &result)?;
                return Err(section_error(section, result));
            }

            if role == Role::Data {
                self.check_samples(sheet.data()?, registry, &section, &mut report, out)?;
            }

            render::pass(out, role)?;
            info!(
                section = %section,
                valid = result.valid_keys.len(),
                "section valid"
            );
            report.stages.push(StageReport {
                role,
                section,
                result,
            });
        }

        render::verdict(out)?;
        Ok(report)
    }

    /// Pairing, ordering and index membership checks over the sample table.
    fn check_samples<W: Write>(
        &self,
        data: &Table,
        registry: Option<&SampleSheet>,
        section: &str,
        report: &mut ValidationReport,
        out: &mut W,
    ) -> Result<()> {
        let missing = self.missing_sample_columns(data, registry.is_some());
        if !missing.is_empty() {
            render::finding(out, &[format!("Missing keys: {}", missing.join(", "))])?;
            return Err(SscheckError::MissingFields {
                section: section.to_string(),
                fields: missing,
                invalid: Vec::new(),
            });
        }

        let mut errors = Vec::new();

        let id_column = &self.config.sample_id_column;
        let ids = data.column(id_column).unwrap_or_default();
        let pairing = check_pairs(&ids)?;

        if pairing.duplicates.is_empty() {
            render::note(out, &format!("{} values are unique", id_column))?;
        } else {
            render::finding(
                out,
                &[format!(
                    "{} is not unique: {}",
                    id_column,
                    pairing.duplicates.join(", ")
                )],
            )?;
        }
        if pairing.unpaired.is_empty() {
            render::note(out, "Every sample has its D/R pair")?;
        } else {
            let lines: Vec<String> = pairing.unpaired.iter().map(ToString::to_string).collect();
            render::finding(out, &lines)?;
        }
        if !pairing.is_clean() {
            errors.push(SscheckError::Pairing {
                violations: pairing.violations(),
            });
        }
        report.pairing = Some(pairing);

        let unordered: Vec<String> = unordered_columns(data, &self.config.ordered_columns)
            .into_iter()
            .map(str::to_string)
            .collect();
        if unordered.is_empty() {
            render::note(
                out,
                &format!("{} are ordered", self.config.ordered_columns.join(", ")),
            )?;
        } else {
            let lines: Vec<String> = unordered
                .iter()
                .map(|column| format!("{} is not ordered", column))
                .collect();
            render::finding(out, &lines)?;

            match self.mode {
                Mode::Strict => errors.push(SscheckError::Ordering { columns: unordered }),
                Mode::SkipIndexOrder => {
                    let message = format!(
                        "{} Index Order Exceptions found, ignoring index order",
                        unordered.len()
                    );
                    warn!(columns = ?unordered, "{}", message);
                    render::note(out, &message)?;
                    report.warnings.push(message);
                }
            }
        }

        match registry {
            Some(registry) => {
                let mismatches =
                    check_index_membership(data, registry.data()?, &self.config.index_columns);
                if mismatches.is_empty() {
                    render::note(
                        out,
                        &format!(
                            "{} values are in the index registry",
                            self.config.index_columns.join(", ")
                        ),
                    )?;
                } else {
                    let lines: Vec<String> = mismatches
                        .iter()
                        .map(|m| {
                            format!("{} not in index registry: {}", m.column, m.values.join(", "))
                        })
                        .collect();
                    render::finding(out, &lines)?;
                    errors.push(SscheckError::IndexMembership {
                        columns: mismatches.iter().map(|m| m.column.clone()).collect(),
                    });
                }
                report.index_mismatches = mismatches;
            }
            None => debug!("no index registry given, skipping index membership"),
        }

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(SscheckError::SampleChecks {
                section: section.to_string(),
                errors,
            }),
        }
    }

    /// Sample-check columns absent from the data table. Index columns only
    /// count when a registry is given.
    fn missing_sample_columns(&self, data: &Table, with_registry: bool) -> Vec<String> {
        let mut required = vec![&self.config.sample_id_column];
        required.extend(&self.config.ordered_columns);
        if with_registry {
            required.extend(&self.config.index_columns);
        }

        let mut missing: Vec<String> = Vec::new();
        for column in required {
            if !data.has_column(column) && !missing.contains(column) {
                missing.push(column.clone());
            }
        }
        missing
    }
}

/// Header and site metadata of a sheet as one record.
fn run_info(sheet: &SampleSheet) -> Result<Record> {
    let records = [Role::Header, Role::Site]
        .into_iter()
        .filter(|role| sheet.has_role(*role))
        .map(|role| sheet.record(role))
        .collect::<Result<Vec<_>>>()?;
    flatten_records(&records)
}

/// Missing keys take precedence; invalid values found alongside them are
/// carried in the same error.
fn section_error(section: String, result: ValidationResult) -> SscheckError {
    if result.missing_keys.is_empty() {
        SscheckError::InvalidFields {
            section,
            values: result.invalid_keys,
        }
    } else {
        SscheckError::MissingFields {
            section,
            fields: result.missing_keys.into_iter().collect(),
            invalid: result.invalid_keys,
        }
    }
}
