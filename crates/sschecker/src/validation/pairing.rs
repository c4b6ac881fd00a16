//! DNA/RNA sample pairing and sample identifier uniqueness.

use std::collections::HashSet;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SscheckError};

/// Nucleic acid type encoded in a sample identifier suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleType {
    /// Identifier ends in `-D`.
    Dna,
    /// Identifier ends in `-R`.
    Rna,
}

impl SampleType {
    /// Classify an identifier by its suffix.
    pub fn from_sample_id(sample_id: &str) -> Option<Self> {
        if sample_id.ends_with(SampleType::Dna.marker()) {
            Some(SampleType::Dna)
        } else if sample_id.ends_with(SampleType::Rna.marker()) {
            Some(SampleType::Rna)
        } else {
            None
        }
    }

    /// Suffix marking this type.
    pub fn marker(&self) -> &'static str {
        match self {
            SampleType::Dna => "-D",
            SampleType::Rna => "-R",
        }
    }

    /// The type a sample must be paired with.
    pub fn counterpart(&self) -> Self {
        match self {
            SampleType::Dna => SampleType::Rna,
            SampleType::Rna => SampleType::Dna,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SampleType::Dna => "DNA",
            SampleType::Rna => "RNA",
        }
    }
}

/// A sample whose counterpart is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnpairedSample {
    pub sample_id: String,
    pub sample_type: SampleType,
    /// Identifier the counterpart should have had.
    pub expected: String,
}

impl fmt::Display for UnpairedSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sample pair for {} sample: {} is required",
            self.sample_type.counterpart().label(),
            self.sample_type.label(),
            self.sample_id
        )
    }
}

/// Findings of the pairing and uniqueness checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingReport {
    /// Identifiers seen more than once, each listed once.
    pub duplicates: Vec<String>,
    /// Samples without a counterpart, in input order.
    pub unpaired: Vec<UnpairedSample>,
}

impl PairingReport {
    /// Number of violations found.
    pub fn violations(&self) -> usize {
        self.duplicates.len() + self.unpaired.len()
    }

    pub fn is_clean(&self) -> bool {
        self.violations() == 0
    }
}

/// Check that every `-D` sample has an `-R` sample with the same prefix and
/// vice versa, and that identifiers are unique.
///
/// Fails with [`SscheckError::UnclassifiableSample`] as soon as an
/// identifier carries neither suffix. Other findings are collected.
pub fn check_pairs<S: AsRef<str>>(sample_ids: &[S]) -> Result<PairingReport> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for id in sample_ids {
        *counts.entry(id.as_ref()).or_default() += 1;
    }
    let known: HashSet<&str> = counts.keys().copied().collect();

    let mut report = PairingReport {
        duplicates: counts
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(id, _)| id.to_string())
            .collect(),
        unpaired: Vec::new(),
    };

    for id in sample_ids {
        let id = id.as_ref();
        let sample_type =
            SampleType::from_sample_id(id).ok_or_else(|| SscheckError::UnclassifiableSample {
                sample_id: id.to_string(),
            })?;

        let prefix = &id[..id.len() - sample_type.marker().len()];
        let expected = format!("{}{}", prefix, sample_type.counterpart().marker());
        if !known.contains(expected.as_str()) {
            report.unpaired.push(UnpairedSample {
                sample_id: id.to_string(),
                sample_type,
                expected,
            });
        }
    }

    Ok(report)
}
