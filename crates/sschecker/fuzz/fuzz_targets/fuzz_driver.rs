//! Fuzz target for the report driver.
//!
//! Any text that parses into a TSO500-shaped sheet must run through every
//! check without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sschecker::{CheckerConfig, Mode, ReportDriver, SampleSheet, SectionParser};

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }
    let Ok(config) = CheckerConfig::tso500() else {
        return;
    };
    let Ok(parser_config) = config.samplesheet.parser_config() else {
        return;
    };

    let parser = SectionParser::with_config(parser_config);
    let Ok(document) = parser.parse_bytes(data) else {
        return;
    };
    let Ok(sheet) = SampleSheet::from_document(document, &config.samplesheet) else {
        return;
    };

    for mode in [Mode::Strict, Mode::SkipIndexOrder] {
        let mut out = Vec::new();
        let _ = ReportDriver::new(&config, mode).run(&sheet, None, &mut out);
    }
});
