//! Per-block reservation parsing.
//!
//! One block is the line range belonging to a single reservation: two
//! metadata header lines, the anchor row, then item lines. A block either
//! yields a complete [`ReservationRecord`] or is skipped wholesale with a
//! [`BlockSkip`] reason; partial records are never produced.

use crate::classify::{classify_category, is_suppressed_item, timing_tag, DishCategory};
use tablecard_core::{DishItem, ReservationRecord, TemplateFamily, TimingTags};

/// Literal prefix carried by the party-size cell.
const PAX_PREFIX: &str = "Pax: ";

/// Index of the first item line within a block (after the two header
/// lines and the anchor row).
const FIRST_ITEM_LINE: usize = 3;

/// Minimum columns a dish row needs (type, item, quantity).
const MIN_DISH_COLUMNS: usize = 3;

/// Column holding the free-text timing cell of a dish row.
const TIMING_COLUMN: usize = 4;

/// Reason an individual reservation block was dropped.
///
/// Recovered locally by the caller (skip-and-continue); only visible
/// indirectly when every block is dropped and the parse yields no records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BlockSkip {
    /// The block is too short to contain its metadata header.
    #[error("block is missing its metadata header lines")]
    MissingHeader,
    /// The table/pax row could not be parsed or lacks the needed columns.
    #[error("block metadata row is malformed")]
    MalformedMetadata,
}

/// Parse one delimited (comma-separated, quote-aware) row.
///
/// Returns `None` for blank or unparsable lines; callers skip those.
fn parse_row(line: &str) -> Option<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(line.as_bytes());

    let mut record = csv::StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => Some(record.iter().map(str::to_string).collect()),
        Ok(false) | Err(_) => None,
    }
}

/// Parse one reservation block into a record, or report why it was skipped.
///
/// Line 0 holds the guest name, line 2 the table/pax/time row; item lines
/// follow from line 3 onward. Metadata failure discards the whole block.
/// A block with sound metadata and zero items is still a valid (empty)
/// record.
pub fn parse_block(
    lines: &[String],
    family: TemplateFamily,
) -> Result<ReservationRecord, BlockSkip> {
    if lines.len() < FIRST_ITEM_LINE {
        return Err(BlockSkip::MissingHeader);
    }

    let guest_name = lines[0].replace('"', "").trim().to_string();

    let metadata = parse_row(&lines[2]).ok_or(BlockSkip::MalformedMetadata)?;
    if metadata.len() < 3 {
        return Err(BlockSkip::MalformedMetadata);
    }
    let table_number = metadata[0].clone();
    let party_size = metadata[2].replace(PAX_PREFIX, "");

    let mut record = ReservationRecord {
        guest_name,
        table_number,
        party_size,
        ..ReservationRecord::default()
    };
    let mut collected_notes: Vec<String> = Vec::new();

    for line in lines.iter().skip(FIRST_ITEM_LINE) {
        if line.trim().is_empty() {
            continue;
        }
        let Some(row) = parse_row(line) else {
            continue;
        };
        if row.is_empty() {
            continue;
        }

        let first_col = row[0].trim().to_lowercase();

        // Notes rows contribute text and never become dish items.
        if first_col.contains("note") {
            if let Some(note) = row.get(1) {
                if !note.trim().is_empty() {
                    collected_notes.push(note.trim().to_string());
                }
            }
            continue;
        }

        if row.len() < MIN_DISH_COLUMNS {
            continue;
        }
        // Column-header echo rows repeat inside the report body.
        if first_col == "type" {
            continue;
        }

        let item_name = row[1].trim().to_string();

        if is_suppressed_item(&item_name, family) {
            log::debug!("suppressed item for {family} template: {item_name}");
            continue;
        }

        let tag = timing_tag(row.get(TIMING_COLUMN).map_or("", String::as_str));
        let dish = DishItem::new(row[2].clone(), item_name);

        match classify_category(&first_col) {
            Some(DishCategory::Starters) => {
                record.starters.push(dish);
                TimingTags::record(&mut record.timing.starter_tag, tag);
            }
            Some(DishCategory::Mains) => {
                record.mains.push(dish);
                TimingTags::record(&mut record.timing.main_tag, tag);
            }
            Some(DishCategory::Sides) => {
                record.sides.push(dish);
            }
            Some(DishCategory::Desserts) => {
                record.desserts.push(dish);
                TimingTags::record(&mut record.timing.dessert_tag, tag);
            }
            Some(DishCategory::Drinks) => {
                record.drinks.push(dish);
            }
            None => {
                log::debug!("dropping unrecognized item row: {first_col}");
            }
        }
    }

    record.notes = collected_notes.join("\n");
    Ok(record)
}
