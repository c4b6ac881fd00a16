//! Example: Parse a samplesheet and print its sections.
//!
//! Usage:
//!   cargo run --example inspect -- <file_path>
//!
//! Example:
//!   cargo run --example inspect -- tests/fixtures/tso500_samplesheet.csv

use std::env;
use std::path::Path;

use sschecker::input::SectionKind;
use sschecker::{Checker, Role};

fn main() -> sschecker::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example inspect -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example inspect -- tests/fixtures/tso500_samplesheet.csv");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    if !path.exists() {
        eprintln!("Error: File not found: {}", path.display());
        std::process::exit(1);
    }

    let checker = Checker::new()?;
    let sheet = checker.load_samplesheet(path)?;

    if let Some(source) = sheet.source() {
        println!("## Source");
        println!("  File: {}", source.file);
        println!("  Size: {} bytes", source.size_bytes);
        println!("  Hash: {}", source.hash);
        println!("  Sections: {}", source.section_count);
        println!();
    }

    println!("## Sections");
    for role in Role::ALL {
        if !sheet.has_role(role) {
            continue;
        }
        let name = sheet.section_name(role);
        match role.kind() {
            SectionKind::Table => {
                let table = sheet.table(role)?;
                println!(
                    "  [{}] {}: {} columns, {} rows",
                    name,
                    role.label(),
                    table.column_count(),
                    table.row_count()
                );
            }
            _ => {
                let record = sheet.record(role)?;
                println!("  [{}] {}: {} fields", name, role.label(), record.len());
                for (key, value) in record {
                    println!("      {:28} {}", key, value);
                }
            }
        }
    }
    println!();

    println!("## Check");
    let mut out = std::io::stdout();
    match checker.check(path, None, &mut out) {
        Ok(report) => println!("{} sections valid", report.stages.len()),
        Err(e) => println!("Failed: {}", e),
    }

    Ok(())
}
