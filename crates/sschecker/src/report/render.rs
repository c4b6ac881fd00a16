//! Plain-text rendering of driver progress.
//!
//! Everything here writes to a caller-supplied [`Write`], so the same lines
//! can go to the terminal, a report file or a test buffer.

use std::io::{self, Write};

use crate::schema::Schema;
use crate::sheet::Role;
use crate::validation::ValidationResult;

const WIDTH: usize = 70;

/// Section banner: a line of `=`, the title, another line of `=`.
pub fn banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let rule = "=".repeat(WIDTH);
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", rule)
}

/// `>> Header is valid` / `>> Reads are valid`.
pub fn pass<W: Write>(out: &mut W, role: Role) -> io::Result<()> {
    let verb = if role.is_plural() { "are" } else { "is" };
    writeln!(out, ">> {} {} valid", role.label(), verb)
}

/// Single progress note, prefixed with `>`.
pub fn note<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "> {}", text)
}

/// A block of sample-level findings framed by `+` lines.
pub fn finding<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    let rule = "+".repeat(WIDTH);
    writeln!(out, "{}", rule)?;
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", rule)
}

/// Every field of a schema with the rule it must satisfy.
pub fn expected_format<W: Write>(out: &mut W, schema: &Schema) -> io::Result<()> {
    let rule = "-".repeat(WIDTH);
    writeln!(out, "Valid Entry has a format of:")?;
    writeln!(out, "{}", rule)?;
    for (field, field_rule) in schema.iter() {
        writeln!(out, "{}: {}", field, field_rule)?;
    }
    writeln!(out, "{}", rule)
}

/// Expected format followed by the keys that were missing or rejected.
pub fn rejection<W: Write>(
    out: &mut W,
    schema: &Schema,
    result: &ValidationResult,
) -> io::Result<()> {
    expected_format(out, schema)?;
    if !result.missing_keys.is_empty() {
        let keys: Vec<&str> = result.missing_keys.iter().map(String::as_str).collect();
        writeln!(out, "Missing keys: {}", keys.join(", "))?;
    }
    if !result.invalid_keys.is_empty() {
        writeln!(out, "Invalid Entry: {}", result.invalid_keys.join(", "))?;
    }
    Ok(())
}

/// Closing verdict after every stage passed.
pub fn verdict<W: Write>(out: &mut W) -> io::Result<()> {
    banner(out, ">> Samplesheet is valid")
}
