//! Raw report line buffer.

use tablecard_core::{CardError, Result};

/// Leading byte-order mark some exporters prepend to UTF-8 reports.
const UTF8_BOM: char = '\u{feff}';

/// Ordered sequence of raw report lines, 1:1 with the source report.
///
/// Read-only after load; lives only for the duration of one parse call.
#[derive(Debug, Clone)]
pub struct ReportBuffer {
    lines: Vec<String>,
}

impl ReportBuffer {
    /// Decode a raw report into lines.
    ///
    /// Tolerates a leading UTF-8 BOM, which would otherwise mask markers
    /// on the first line.
    ///
    /// # Errors
    /// Returns [`CardError::InputRead`] if the data is not valid UTF-8.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(data)
            .map_err(|e| CardError::InputRead(format!("report must be valid UTF-8: {e}")))?;
        let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

        Ok(Self {
            lines: text.lines().map(str::to_string).collect(),
        })
    }

    /// All lines, in source order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the report contains no lines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
