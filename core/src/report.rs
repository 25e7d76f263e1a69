use crate::document::read_document;
use crate::error::ScanResult;
use crate::render::{display_line, DisplayLine};
use crate::status::{collect_statuses, unique_sorted_statuses};
use serde_json::Value;
use std::io::{self, Write};
use std::path::Path;

/// Unique status values of one document, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusReport {
    pub values: Vec<Value>,
}

impl StatusReport {
    pub fn from_document(document: &Value) -> ScanResult<Self> {
        let collected = collect_statuses(document);
        let values = unique_sorted_statuses(collected)?;
        Ok(Self { values })
    }

    pub fn scan_file(path: impl AsRef<Path>) -> ScanResult<Self> {
        let path = path.as_ref();
        let document = read_document(path)?;
        let report = Self::from_document(&document)?;
        log::debug!("{}: {} status line(s)", path.display(), report.len());
        Ok(report)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.values.iter().map(display_line)
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for value in &self.values {
            writeln!(out, "{}", DisplayLine(value))?;
        }
        out.flush()
    }
}
