//! Anchor scanning and block segmentation.
//!
//! A reservation report is an unlabeled line stream. Reservation starts
//! are recovered from marker co-occurrence, and the line ranges between
//! anchors become per-reservation blocks.

/// Marker that, together with [`ARRIVAL_MARKER`], identifies a
/// reservation-start anchor line.
pub const PAX_MARKER: &str = "Pax:";

/// Marker that, together with [`PAX_MARKER`], identifies a
/// reservation-start anchor line.
pub const ARRIVAL_MARKER: &str = "Arrival:";

/// Marker for the end-of-report anchor. Scanning stops at the first line
/// containing it; content after it is never inspected.
pub const SUMMARY_MARKER: &str = "Report item summary";

/// Number of guest-metadata lines preceding each anchor line.
///
/// The report layout places the guest name and the table/pax/time row on
/// the two lines immediately before the line carrying the pax/arrival
/// markers, so every block starts that many lines before its anchor.
/// Anchors closer than this to the start of the buffer are malformed and
/// their blocks are skipped, not faulted on.
pub const HEADER_LOOKBACK: usize = 2;

/// Result of one linear scan over the report lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorScan {
    /// 0-based indices of reservation-start anchor lines, strictly
    /// increasing by construction.
    pub starts: Vec<usize>,
    /// Index of the end-of-report anchor line, if present.
    pub summary: Option<usize>,
}

/// Line range `[start, end)` belonging to one reservation, including its
/// two-line metadata header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    /// First line of the block (guest name line).
    pub start: usize,
    /// One past the last line of the block.
    pub end: usize,
}

/// Scan lines in order exactly once, locating reservation-start anchors
/// and the end-of-report anchor.
#[must_use]
pub fn scan_anchors(lines: &[String]) -> AnchorScan {
    let mut starts = Vec::new();
    let mut summary = None;

    for (i, line) in lines.iter().enumerate() {
        if line.contains(PAX_MARKER) && line.contains(ARRIVAL_MARKER) {
            starts.push(i);
        }
        if line.contains(SUMMARY_MARKER) {
            summary = Some(i);
            break;
        }
    }

    log::debug!(
        "anchor scan: {} reservation starts, summary at {summary:?}",
        starts.len()
    );

    AnchorScan { starts, summary }
}

/// Turn anchor positions into one [`BlockSpan`] per reservation.
///
/// For anchor *i*, `start = anchor[i] - HEADER_LOOKBACK`; the block ends
/// where the next block's header begins, and the last block ends at the
/// summary anchor (or the end of the buffer when no summary was found).
/// Out-of-range spans are skipped with a warning rather than failing the
/// whole batch.
#[must_use]
pub fn segment_blocks(scan: &AnchorScan, buffer_len: usize) -> Vec<BlockSpan> {
    let report_end = scan.summary.unwrap_or(buffer_len).min(buffer_len);
    let mut blocks = Vec::with_capacity(scan.starts.len());

    for (i, &anchor) in scan.starts.iter().enumerate() {
        let Some(start) = anchor.checked_sub(HEADER_LOOKBACK) else {
            log::warn!("skipping reservation anchor at line {anchor}: missing header lines");
            continue;
        };

        let end = match scan.starts.get(i + 1) {
            Some(&next) => next.saturating_sub(HEADER_LOOKBACK),
            None => report_end,
        };
        let end = end.min(buffer_len);

        if end <= start {
            log::warn!("skipping reservation anchor at line {anchor}: empty line range");
            continue;
        }

        blocks.push(BlockSpan { start, end });
    }

    blocks
}
