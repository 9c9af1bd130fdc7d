// src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use devscripts_engine::stats::ExtensionTotals;
use std::fmt::Write as _;
use std::io::Write;

/// Render the per-extension totals in the requested format.
///
/// # Errors
///
/// Returns an error if serialization fails or the writer fails.
pub fn write_totals<W: Write>(
    out: &mut W,
    totals: &ExtensionTotals,
    file_count: usize,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Dict => writeln!(out, "{}", dict_literal(totals))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(totals)?)?,
        OutputFormat::Yaml => write!(out, "{}", serde_yaml::to_string(totals)?)?,
        OutputFormat::Table => write_table(out, totals, file_count)?,
    }
    Ok(())
}

/// `{'.rs': 120, '': 4}` style mapping on one line.
#[must_use]
pub fn dict_literal(totals: &ExtensionTotals) -> String {
    let mut line = String::from("{");
    for (i, (ext, lines)) in totals.iter().enumerate() {
        if i > 0 {
            line.push_str(", ");
        }
        let _ = write!(line, "{}: {lines}", quote(ext));
    }
    line.push('}');
    line
}

/// Quote a key with single quotes unless it contains `'` and no `"`.
fn quote(s: &str) -> String {
    let q = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push(q);
    for c in s.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == q => {
                quoted.push('\\');
                quoted.push(c);
            }
            c if is_printable(c) => quoted.push(c),
            c => {
                let code = u32::from(c);
                let _ = match code {
                    0..=0xff => write!(quoted, "\\x{code:02x}"),
                    0x100..=0xffff => write!(quoted, "\\u{code:04x}"),
                    _ => write!(quoted, "\\U{code:08x}"),
                };
            }
        }
    }
    quoted.push(q);
    quoted
}

/// Characters kept verbatim inside a quoted key. Controls, separators other
/// than the ASCII space, format characters and private-use code points are
/// escaped. Unassigned code points are kept.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    !matches!(
        u32::from(c),
        0xad | 0x600..=0x605
            | 0x61c
            | 0x6dd
            | 0x70f
            | 0x890..=0x891
            | 0x8e2
            | 0x180e
            | 0x200b..=0x200f
            | 0x202a..=0x202e
            | 0x2060..=0x2064
            | 0x2066..=0x206f
            | 0xfeff
            | 0xfff9..=0xfffb
            | 0x110bd
            | 0x110cd
            | 0x13430..=0x1343f
            | 0x1bca0..=0x1bca3
            | 0x1d173..=0x1d17a
            | 0xe0001
            | 0xe0020..=0xe007f
            | 0xe000..=0xf8ff
            | 0xf0000..=0xffffd
            | 0x100000..=0x10fffd
    )
}

fn write_table<W: Write>(out: &mut W, totals: &ExtensionTotals, file_count: usize) -> Result<()> {
    writeln!(out, "    LINES     EXT")?;
    writeln!(out, "----------------------------")?;

    for (ext, lines) in totals.iter() {
        let ext = if ext.is_empty() { "(none)" } else { ext };
        writeln!(out, "{lines:>9}     {ext}")?;
    }

    writeln!(out, "---")?;
    writeln!(
        out,
        "{:>9}     TOTAL ({} extensions, {file_count} files)",
        totals.total(),
        totals.len()
    )?;
    Ok(())
}
