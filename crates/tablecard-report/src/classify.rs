//! Timing-tag classification and template-specific item filtering.
//!
//! Matching is deliberately loose substring containment: `"int"` matches
//! `"interval"` and anything else containing it. Report producers rely on
//! this leniency, so it is preserved verbatim rather than tightened to
//! word boundaries.

use tablecard_core::{TemplateFamily, TimingTag};

/// Category a dish row is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DishCategory {
    /// Starter dishes; carries a timing tag.
    Starters,
    /// Main dishes; carries a timing tag.
    Mains,
    /// Side dishes; no timing tag.
    Sides,
    /// Desserts; carries a timing tag.
    Desserts,
    /// Drinks and wines; no timing tag.
    Drinks,
}

/// Map a free-text timing cell to a [`TimingTag`].
///
/// Lower-cases and trims the input. `(Pre)` when the text contains both
/// `"pre"` and `"perf"` substrings or a literal `"pre-"`; otherwise
/// `(Int)` when it contains `"int"`; otherwise no tag.
#[must_use]
pub fn timing_tag(text: &str) -> TimingTag {
    let t = text.trim().to_lowercase();
    if (t.contains("pre") && t.contains("perf")) || t.contains("pre-") {
        TimingTag::Pre
    } else if t.contains("int") {
        TimingTag::Int
    } else {
        TimingTag::None
    }
}

/// Classify a row by its first column (already lower-cased and trimmed).
///
/// Substring containment in priority order; rows matching no category are
/// dropped by the caller.
#[must_use]
pub fn classify_category(first_col: &str) -> Option<DishCategory> {
    if first_col.contains("starter") {
        Some(DishCategory::Starters)
    } else if first_col.contains("main") {
        Some(DishCategory::Mains)
    } else if first_col.contains("side") {
        Some(DishCategory::Sides)
    } else if first_col.contains("dessert") {
        Some(DishCategory::Desserts)
    } else if first_col.contains("drink") || first_col.contains("wine") {
        Some(DishCategory::Drinks)
    } else {
        None
    }
}

/// Template-specific exclusion rule, applied before categorisation.
///
/// True (drop the item) iff the crush template family is active and the
/// item name contains still or sparkling water, case-insensitively.
#[must_use]
pub fn is_suppressed_item(name: &str, family: TemplateFamily) -> bool {
    if family != TemplateFamily::Crush {
        return false;
    }
    let lower = name.to_lowercase();
    lower.contains("still water") || lower.contains("sparkling water")
}
