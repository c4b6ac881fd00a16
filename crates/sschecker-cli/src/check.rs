//! Check command - validate a samplesheet and write its report files.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use sschecker::{Checker, CheckerConfig, Role, ValidationReport};

use crate::cli::Cli;

pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.samplesheet.exists() {
        return Err(format!("File not found: {}", cli.samplesheet.display()).into());
    }
    if let Some(udp) = &cli.udp {
        if !udp.exists() {
            return Err(format!("File not found: {}", udp.display()).into());
        }
    }

    let config = match &cli.config {
        Some(path) => CheckerConfig::load(path)?,
        None => CheckerConfig::tso500()?,
    };
    let checker = Checker::with_config(config).with_mode(cli.mode.into());

    let stem = report_stem(&cli.samplesheet);
    fs::create_dir_all(&cli.output)
        .map_err(|e| format!("Failed to create '{}': {}", cli.output.display(), e))?;
    let text_path = cli.output.join(format!("{}.report.txt", stem));
    let json_path = cli.output.join(format!("{}.report.json", stem));

    let file = File::create(&text_path)
        .map_err(|e| format!("Failed to create '{}': {}", text_path.display(), e))?;
    let mut out = Tee {
        console: io::stdout().lock(),
        file: BufWriter::new(file),
    };

    let result = checker.check(&cli.samplesheet, cli.udp.as_deref(), &mut out);
    if let Err(e) = &result {
        writeln!(out.file, "Error: {}", e)?;
    }
    out.flush()?;

    let report = result?;
    report.save(&json_path)?;
    print_summary(&report, &cli.samplesheet, &[text_path, json_path]);

    Ok(())
}

fn print_summary(report: &ValidationReport, samplesheet: &Path, saved: &[PathBuf]) {
    println!();
    if let Some(run_name) = report.run_info.get("RunName") {
        println!("{} {}", "Run".cyan().bold(), run_name.white());
    }
    if let Some(data) = report.stage(Role::Data) {
        println!(
            "Checked {} sections, {} sample values",
            report.stages.len().to_string().white().bold(),
            data.result.valid_keys.len().to_string().white().bold()
        );
    }
    for warning in &report.warnings {
        println!("{} {}", "Warning:".yellow().bold(), warning);
    }

    println!(
        "{} {}",
        "Samplesheet is valid:".green().bold(),
        samplesheet.display().to_string().white()
    );
    for path in saved {
        println!(
            "{} {}",
            "Saved to".green().bold(),
            path.display().to_string().white()
        );
    }
}

/// File name stem used for both report files.
fn report_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "samplesheet".to_string())
}

/// Writes everything to the terminal and the text report.
struct Tee<A, B> {
    console: A,
    file: B,
}

impl<A: Write, B: Write> Write for Tee<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.console.write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.console.flush()?;
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tee_writes_both() {
        let mut tee = Tee {
            console: Vec::new(),
            file: Vec::new(),
        };
        writeln!(tee, ">> Header is valid").unwrap();
        assert_eq!(tee.console, tee.file);
        assert_eq!(tee.file, b">> Header is valid\n");
    }

    #[test]
    fn test_report_stem() {
        assert_eq!(report_stem(Path::new("runs/240101_SampleSheet.csv")), "240101_SampleSheet");
        assert_eq!(report_stem(Path::new("SampleSheet")), "SampleSheet");
    }
}
