//! Fuzz target for the section parser.
//!
//! The parser must return an error, never panic, on arbitrary bytes, with
//! any delimiter and any number of skipped lines.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sschecker::input::ParserConfig;
use sschecker::SectionParser;
use std::io::Write;

#[derive(Debug, Arbitrary)]
struct Input {
    delimiter: u8,
    skip_lines: u8,
    tabular: bool,
    data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    // Only process reasonable-sized inputs to avoid OOM
    if input.data.len() > 100_000 {
        return;
    }

    let mut config = ParserConfig::default()
        .with_delimiter(input.delimiter)
        .with_skip_lines(input.skip_lines as usize);
    if input.tabular {
        config = config.with_tabular(["Data", "TSO500S_Data"]);
    }
    let parser = SectionParser::with_config(config);

    if let Ok(document) = parser.parse_bytes(&input.data) {
        let mut buf = Vec::new();
        let _ = document.write_delimited(&mut buf, input.delimiter);
    }

    if let Ok(mut temp_file) = tempfile::NamedTempFile::new() {
        if temp_file.write_all(&input.data).is_ok() {
            let _ = parser.parse_file(temp_file.path());
        }
    }
});
