//! Reservation report parsing for `tablecard`
//!
//! Turns a raw delimited-text reservation report into an ordered list of
//! [`ReservationRecord`]s, ready for card rendering.
//!
//! # Pipeline
//!
//! ```text
//! raw bytes ─► ReportBuffer ─► scan_anchors ─► segment_blocks ─► parse_block ─► Vec<ReservationRecord>
//! ```
//!
//! Reservation boundaries are recovered from marker co-occurrence on an
//! unlabeled line stream (`"Pax:"` + `"Arrival:"` on one line), blocks are
//! segmented between anchors, and each block is parsed independently.
//! Malformed blocks are skipped with a logged reason; only an entirely
//! empty result is an error.

pub mod anchors;
pub mod block;
pub mod buffer;
pub mod classify;

pub use anchors::{scan_anchors, segment_blocks, AnchorScan, BlockSpan, HEADER_LOOKBACK};
pub use block::{parse_block, BlockSkip};
pub use buffer::ReportBuffer;
pub use classify::{classify_category, is_suppressed_item, timing_tag, DishCategory};

use tablecard_core::{CardError, ReservationRecord, Result, TemplateFamily};

/// Parse a raw reservation report into records, in anchor order.
///
/// # Errors
/// Returns [`CardError::InputRead`] for undecodable input and
/// [`CardError::NoValidReservations`] when no block yields a record
/// (no anchors found, or every block failed metadata parsing).
pub fn parse_report(data: &[u8], family: TemplateFamily) -> Result<Vec<ReservationRecord>> {
    let buffer = ReportBuffer::from_bytes(data)?;
    let scan = scan_anchors(buffer.lines());
    let blocks = segment_blocks(&scan, buffer.len());

    let mut records = Vec::with_capacity(blocks.len());
    for span in blocks {
        match parse_block(&buffer.lines()[span.start..span.end], family) {
            Ok(record) => records.push(record),
            Err(reason) => {
                log::warn!(
                    "skipping reservation block at lines {}..{}: {reason}",
                    span.start,
                    span.end
                );
            }
        }
    }

    if records.is_empty() {
        return Err(CardError::NoValidReservations);
    }

    log::info!("parsed {} reservations from report", records.len());
    Ok(records)
}
