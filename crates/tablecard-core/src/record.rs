//! Reservation record types.
//!
//! A [`ReservationRecord`] is the fully parsed, template-ready
//! representation of one reservation: guest metadata, categorized dish
//! lists, aggregated notes, and per-category timing tags. Records are
//! constructed once by the report parser and never mutated afterwards.
//!
//! Everything here is `Serialize` so an external template engine can
//! consume a record as a flat JSON context.

use serde::{Serialize, Serializer};

/// Template family selected for a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateFamily {
    /// Balcony cards
    Balcony,
    /// PHH cards
    Phh,
    /// Crush cards (water items are suppressed for this family)
    Crush,
}

impl TemplateFamily {
    /// Lower-case identifier, as used in template selection and output names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Balcony => "balcony",
            Self::Phh => "phh",
            Self::Crush => "crush",
        }
    }

    /// Master template file name for this family.
    #[must_use]
    pub const fn template_file_name(self) -> &'static str {
        match self {
            Self::Balcony => "Balcony Cards.docx",
            Self::Phh => "PHH Cards.docx",
            Self::Crush => "Crush Cards.docx",
        }
    }
}

impl std::fmt::Display for TemplateFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TemplateFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "balcony" => Ok(Self::Balcony),
            "phh" => Ok(Self::Phh),
            "crush" => Ok(Self::Crush),
            other => Err(format!("unknown template family: {other}")),
        }
    }
}

/// Timing label for a dish category, derived from free-text cells.
///
/// Serialises as the rendered label (`""`, `"(Pre)"`, `"(Int)"`) because
/// templates interpolate the tag verbatim next to the section title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimingTag {
    /// No timing information.
    #[default]
    None,
    /// Serve before the performance.
    Pre,
    /// Serve during the interval.
    Int,
}

impl TimingTag {
    /// Rendered label for templates.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Pre => "(Pre)",
            Self::Int => "(Int)",
        }
    }

    /// True when no timing information was found.
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl std::fmt::Display for TimingTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TimingTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Per-category timing tags for one reservation.
///
/// The first non-empty tag encountered among a category's items wins;
/// later tags in the same category are ignored. Sides and drinks do not
/// carry timing tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimingTags {
    /// Tag for the starters section.
    pub starter_tag: TimingTag,
    /// Tag for the mains section.
    pub main_tag: TimingTag,
    /// Tag for the desserts section.
    pub dessert_tag: TimingTag,
}

impl TimingTags {
    /// Record `tag` for the category slot, first-wins.
    pub fn record(slot: &mut TimingTag, tag: TimingTag) {
        if slot.is_none() && !tag.is_none() {
            *slot = tag;
        }
    }
}

/// One ordered dish line on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DishItem {
    /// Quantity cell, verbatim from the report.
    pub quantity: String,
    /// Trimmed dish name.
    pub name: String,
    /// Reserved for future use; currently always empty.
    pub dietary_note: String,
}

impl DishItem {
    /// Create a dish item with an empty dietary note.
    #[must_use]
    pub const fn new(quantity: String, name: String) -> Self {
        Self {
            quantity,
            name,
            dietary_note: String::new(),
        }
    }
}

/// The parsed unit passed to rendering: one reservation, template-ready.
///
/// A record is either fully populated (guest name, table, party size all
/// present) or not created at all; partially-parsed blocks are discarded
/// wholesale by the parser. A record with sound metadata and zero items is
/// still valid (an empty card is legitimate).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReservationRecord {
    /// Guest name from the block header.
    pub guest_name: String,
    /// Table number cell, verbatim.
    pub table_number: String,
    /// Party size with the `"Pax: "` prefix removed.
    pub party_size: String,
    /// Newline-joined note fragments, in source order.
    pub notes: String,
    /// Per-category timing tags.
    #[serde(flatten)]
    pub timing: TimingTags,
    /// Starter dishes, in source order.
    pub starters: Vec<DishItem>,
    /// Main dishes, in source order.
    pub mains: Vec<DishItem>,
    /// Side dishes, in source order.
    pub sides: Vec<DishItem>,
    /// Desserts, in source order.
    pub desserts: Vec<DishItem>,
    /// Drinks and wines, in source order.
    pub drinks: Vec<DishItem>,
}

impl ReservationRecord {
    /// Total item count across all five category lists.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.starters.len()
            + self.mains.len()
            + self.sides.len()
            + self.desserts.len()
            + self.drinks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_family_as_str() {
        assert_eq!(TemplateFamily::Balcony.as_str(), "balcony");
        assert_eq!(TemplateFamily::Phh.as_str(), "phh");
        assert_eq!(TemplateFamily::Crush.as_str(), "crush");
    }

    #[test]
    fn test_template_family_file_names() {
        assert_eq!(
            TemplateFamily::Balcony.template_file_name(),
            "Balcony Cards.docx"
        );
        assert_eq!(TemplateFamily::Phh.template_file_name(), "PHH Cards.docx");
        assert_eq!(
            TemplateFamily::Crush.template_file_name(),
            "Crush Cards.docx"
        );
    }

    #[test]
    fn test_template_family_from_str() {
        assert_eq!(
            "balcony".parse::<TemplateFamily>().unwrap(),
            TemplateFamily::Balcony
        );
        assert_eq!(
            " CRUSH ".parse::<TemplateFamily>().unwrap(),
            TemplateFamily::Crush,
            "Family parsing should be case-insensitive and trim whitespace"
        );
        assert!(
            "terrace".parse::<TemplateFamily>().is_err(),
            "Unknown family names should be rejected"
        );
    }

    #[test]
    fn test_timing_tag_labels() {
        assert_eq!(TimingTag::None.as_str(), "");
        assert_eq!(TimingTag::Pre.as_str(), "(Pre)");
        assert_eq!(TimingTag::Int.as_str(), "(Int)");
    }

    #[test]
    fn test_timing_tag_serializes_as_label() {
        let json = serde_json::to_string(&TimingTag::Pre).unwrap();
        assert_eq!(json, "\"(Pre)\"");
        let json = serde_json::to_string(&TimingTag::None).unwrap();
        assert_eq!(json, "\"\"", "Absent tag should serialize as empty string");
    }

    #[test]
    fn test_timing_tags_first_wins() {
        let mut tags = TimingTags::default();
        TimingTags::record(&mut tags.starter_tag, TimingTag::Pre);
        TimingTags::record(&mut tags.starter_tag, TimingTag::Int);
        assert_eq!(
            tags.starter_tag,
            TimingTag::Pre,
            "First non-empty tag should win; later tags ignored"
        );
    }

    #[test]
    fn test_timing_tags_empty_does_not_overwrite() {
        let mut tags = TimingTags::default();
        TimingTags::record(&mut tags.main_tag, TimingTag::None);
        assert_eq!(tags.main_tag, TimingTag::None);
        TimingTags::record(&mut tags.main_tag, TimingTag::Int);
        assert_eq!(
            tags.main_tag,
            TimingTag::Int,
            "An empty tag should not claim the first-wins slot"
        );
    }

    #[test]
    fn test_dish_item_new_has_empty_dietary_note() {
        let dish = DishItem::new("2".to_string(), "Soup".to_string());
        assert_eq!(dish.quantity, "2");
        assert_eq!(dish.name, "Soup");
        assert_eq!(
            dish.dietary_note, "",
            "Dietary note is reserved and should start empty"
        );
    }

    #[test]
    fn test_record_item_count() {
        let mut record = ReservationRecord::default();
        assert_eq!(record.item_count(), 0);

        record
            .starters
            .push(DishItem::new("1".to_string(), "Soup".to_string()));
        record
            .drinks
            .push(DishItem::new("2".to_string(), "Merlot".to_string()));
        assert_eq!(record.item_count(), 2);
    }

    #[test]
    fn test_record_serializes_flat_timing_tags() {
        let record = ReservationRecord {
            guest_name: "Ms Smith".to_string(),
            table_number: "12".to_string(),
            party_size: "4".to_string(),
            timing: TimingTags {
                starter_tag: TimingTag::Pre,
                ..TimingTags::default()
            },
            ..ReservationRecord::default()
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value["starter_tag"], "(Pre)",
            "Timing tags should flatten into the record context"
        );
        assert_eq!(value["guest_name"], "Ms Smith");
        assert_eq!(value["party_size"], "4");
        assert!(
            value["starters"].as_array().unwrap().is_empty(),
            "Category lists should serialize even when empty"
        );
    }
}
