use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::Formatter;

use crate::models::RegisterEntry;

/// Single-line JSON with a space after every `,` and `:`, so register lines
/// can be grepped for `"category": "cpp"` style fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// One register line for `entry`, without the trailing newline
pub fn to_register_line(entry: &RegisterEntry) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
    entry
        .serialize(&mut serializer)
        .with_context(|| format!("Failed to serialize entry for {}", entry.file))?;
    String::from_utf8(buf).context("Serialized register line is not UTF-8")
}

/// Write entries as JSON Lines, replacing any existing file
pub fn write_register(path: &Path, entries: &[RegisterEntry]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create register file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for entry in entries {
        let line = to_register_line(entry)?;
        writer.write_all(line.as_bytes()).context("Failed to write register line")?;
        writer.write_all(b"\n").context("Failed to write register line")?;
    }

    writer.flush().with_context(|| format!("Failed to flush register file: {}", path.display()))
}

/// Load a register written by [`write_register`]. Blank lines are skipped;
/// any malformed line is an error.
pub fn read_register(path: &Path) -> Result<Vec<RegisterEntry>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open register file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut entries = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read line from register file")?;
        if line.trim().is_empty() {
            continue;
        }
        let entry = serde_json::from_str(&line).with_context(|| {
            format!("Failed to parse line {} in {}", line_num + 1, path.display())
        })?;
        entries.push(entry);
    }

    Ok(entries)
}
