//! Card rendering: the template-engine capability and its default
//! docx-backed implementation.
//!
//! A rendered card is kept as a small block model ([`CardBlock`]) and only
//! lowered to OOXML when persisted. That keeps composition and ordering
//! testable without unzipping document archives.

use std::path::Path;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run};
use tablecard_core::{CardError, DishItem, ReservationRecord, Result, TimingTag};

/// Font size (half-points) for the guest-name heading.
const HEADING_SIZE: usize = 36;

/// Font size (half-points) for section titles.
const SECTION_SIZE: usize = 26;

/// One block of a rendered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardBlock {
    /// Guest-name heading, centered.
    Heading(String),
    /// Plain line of text.
    Line(String),
    /// Category section title, with its timing tag when present.
    SectionTitle(String),
    /// One dish line: quantity and name.
    Item { quantity: String, name: String },
    /// Explicit page break separating merged cards.
    PageBreak,
}

/// A rendered card (or a merged run of cards) awaiting persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedCard {
    blocks: Vec<CardBlock>,
}

impl RenderedCard {
    /// Create a card from its blocks.
    #[must_use]
    pub fn new(blocks: Vec<CardBlock>) -> Self {
        Self { blocks }
    }

    /// The card's blocks, in render order.
    #[must_use]
    pub fn blocks(&self) -> &[CardBlock] {
        &self.blocks
    }

    /// Append a single block.
    pub fn push(&mut self, block: CardBlock) {
        self.blocks.push(block);
    }

    /// Append every block of another card.
    pub fn extend_from(&mut self, other: &Self) {
        self.blocks.extend(other.blocks.iter().cloned());
    }

    /// Number of explicit page breaks in the card.
    #[must_use]
    pub fn page_breaks(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, CardBlock::PageBreak))
            .count()
    }

    /// Text content of the card, one line per textual block.
    ///
    /// Used by tests and logging; page breaks render as blank lines.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            match block {
                CardBlock::Heading(text)
                | CardBlock::Line(text)
                | CardBlock::SectionTitle(text) => out.push_str(text),
                CardBlock::Item { quantity, name } => {
                    out.push_str(quantity);
                    out.push_str(" x ");
                    out.push_str(name);
                }
                CardBlock::PageBreak => {}
            }
            out.push('\n');
        }
        out
    }

    /// Lower the block model to OOXML and persist it.
    ///
    /// # Errors
    /// Returns [`CardError::Io`] if the file cannot be created and
    /// [`CardError::Render`] if packing the document fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut docx = Docx::new();
        for block in &self.blocks {
            docx = docx.add_paragraph(Self::lower_block(block));
        }

        let file = std::fs::File::create(path)?;
        docx.build()
            .pack(file)
            .map_err(|e| CardError::Render(format!("failed to pack document: {e}")))?;
        Ok(())
    }

    fn lower_block(block: &CardBlock) -> Paragraph {
        match block {
            CardBlock::Heading(text) => Paragraph::new()
                .add_run(Run::new().add_text(text.as_str()).bold().size(HEADING_SIZE))
                .align(AlignmentType::Center),
            CardBlock::SectionTitle(text) => Paragraph::new()
                .add_run(Run::new().add_text(text.as_str()).bold().size(SECTION_SIZE)),
            CardBlock::Line(text) => {
                Paragraph::new().add_run(Run::new().add_text(text.as_str()))
            }
            CardBlock::Item { quantity, name } => Paragraph::new()
                .add_run(Run::new().add_text(format!("{quantity} x {name}"))),
            CardBlock::PageBreak => {
                Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
            }
        }
    }
}

/// The external template-rendering capability: one record in, one
/// standalone card out.
pub trait TemplateEngine {
    /// Render a reservation record into a fresh card.
    ///
    /// # Errors
    /// Returns [`CardError::Render`] when the record cannot be rendered.
    fn render(&self, record: &ReservationRecord) -> Result<RenderedCard>;
}

/// Default card engine producing a docx card layout per reservation.
///
/// Sections are emitted only for non-empty categories and the notes
/// section only when notes exist, so an empty record yields a card with
/// just its header.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxCardEngine;

impl DocxCardEngine {
    /// Create a new card engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn push_section(
        blocks: &mut Vec<CardBlock>,
        title: &str,
        tag: TimingTag,
        items: &[DishItem],
    ) {
        if items.is_empty() {
            return;
        }
        let title = if tag.is_none() {
            title.to_string()
        } else {
            format!("{title} {tag}")
        };
        blocks.push(CardBlock::SectionTitle(title));
        for item in items {
            blocks.push(CardBlock::Item {
                quantity: item.quantity.clone(),
                name: item.name.clone(),
            });
        }
    }
}

impl TemplateEngine for DocxCardEngine {
    fn render(&self, record: &ReservationRecord) -> Result<RenderedCard> {
        let mut blocks = vec![
            CardBlock::Heading(record.guest_name.clone()),
            CardBlock::Line(format!(
                "Table {}    Pax: {}",
                record.table_number, record.party_size
            )),
        ];

        Self::push_section(
            &mut blocks,
            "Starters",
            record.timing.starter_tag,
            &record.starters,
        );
        Self::push_section(&mut blocks, "Mains", record.timing.main_tag, &record.mains);
        Self::push_section(&mut blocks, "Sides", TimingTag::None, &record.sides);
        Self::push_section(
            &mut blocks,
            "Desserts",
            record.timing.dessert_tag,
            &record.desserts,
        );
        Self::push_section(&mut blocks, "Drinks", TimingTag::None, &record.drinks);

        if !record.notes.is_empty() {
            blocks.push(CardBlock::SectionTitle("Notes".to_string()));
            for line in record.notes.lines() {
                blocks.push(CardBlock::Line(line.to_string()));
            }
        }

        Ok(RenderedCard::new(blocks))
    }
}
