//! Built-in schema tables for TSO500 run samplesheets.
//!
//! These mirror the samplesheet standard used for the custom Dragen TSO500
//! solid tumor panel. Deployments with other instruments or sites override
//! them through [`crate::config::CheckerConfig`].

use super::table::{Schema, SchemaSet};
use crate::error::Result;
use crate::sheet::Role;

const ADAPTER_READ1: &str = "CTGTCTCTTATACACATCTCCGAGCCCACGAGAC";
const ADAPTER_READ2: &str = "CTGTCTCTTATACACATCTGACGCTGCCGACGA";
const OVERRIDE_CYCLES: &str = "U7N1Y93;I10;I10;U7N1Y93";

/// `<digits or NTC>-<8 digits>-<D|R>`
const SAMPLE_ID: &str = r"^(?:\d+|NTC)-\d{8}-(D|R)$";
const INDEX_SEQUENCE: &str = r"^[ACGT]+$";
const WORD: &str = r"^\w+$";

pub(crate) fn schema_set() -> Result<SchemaSet> {
    Ok(SchemaSet::new()
        .with_schema(Role::Header, header()?)
        .with_schema(Role::Reads, reads())
        .with_schema(Role::Settings, settings("1.0.0"))
        .with_schema(Role::Site, site())
        .with_schema(Role::Data, data()?)
        .with_schema(Role::BclconvertSettings, settings("3.6.3"))
        .with_schema(Role::BclconvertData, bclconvert_data()?))
}

fn header() -> Result<Schema> {
    Schema::new()
        .with_pattern("FileFormatVersion", r"^[0-9]+$")?
        .with_pattern("Investigator Name", r"^[A-Za-z ]+$")?
        .with_pattern("RunName", r"^\d{6}_\d{2}$")?
        .with_pattern("Date", r"^\d{1,2}/\d{1,2}/\d{4}$")?
        .with_literal("InstrumentType", "NovaSeq6000")
        .with_pattern("InstrumentPlatform", r"^\.{3}$")?
        .with_pattern("Assay", r"^[A-Z0-9 ]+$")?
        .with_pattern("Index Adapters", r"^[A-Za-z0-9/ ]+$")
}

fn reads() -> Schema {
    Schema::new()
        .with_literal("Read1Cycles", "101")
        .with_literal("Read2Cycles", "101")
        .with_literal("Index1Cycles", "10")
        .with_literal("Index2Cycles", "10")
}

// TSO500S_Settings and BCLConvert_Settings differ only in software version.
fn settings(software_version: &str) -> Schema {
    Schema::new()
        .with_literal("SoftwareVersion", software_version)
        .with_literal("AdapterRead1", ADAPTER_READ1)
        .with_literal("AdapterRead2", ADAPTER_READ2)
        .with_literal("AdapterBehavior", "trim")
        .with_literal("MinimumTrimmedReadLength", "35")
        .with_literal("MaskShortReads", "35")
        .with_literal("OverrideCycles", OVERRIDE_CYCLES)
}

fn site() -> Schema {
    Schema::new()
        .with_literal("Sequencing Site", "JHH")
        .with_literal("Instrument ID", "A00532")
}

fn data() -> Result<Schema> {
    Schema::new()
        .with_pattern("Sample_ID", SAMPLE_ID)?
        .with_pattern("Sample_Name", SAMPLE_ID)?
        .with_pattern("Index_ID", WORD)?
        .with_pattern("index", INDEX_SEQUENCE)?
        .with_pattern("index2", INDEX_SEQUENCE)?
        .with_pattern("I7_Index_ID", WORD)?
        .with_pattern("I5_Index_ID", WORD)?
        .with_pattern("Description", r"^(?:\d+|NTC)-(RNA|DNA)+$")?
        .with_pattern("Pair_ID", r"^(?:\d|NTC)+$")?
        .with_pattern("Sample_Type", r"^(RNA|DNA)+$")
}

fn bclconvert_data() -> Result<Schema> {
    Schema::new()
        .with_pattern("Sample_ID", r"^(?:\d+|NTC)-\d{8}-[DR]$")?
        .with_pattern("index", INDEX_SEQUENCE)?
        .with_pattern("index2", INDEX_SEQUENCE)
}
