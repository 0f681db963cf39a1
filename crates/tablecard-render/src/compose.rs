//! Document composition: appending standalone cards onto a working
//! document with explicit page breaks.
//!
//! Composition is an injected capability. A pipeline built without a
//! composer runs in degraded mode (first card only), so tests exercise
//! both paths without environment manipulation.

use crate::engine::{CardBlock, RenderedCard};
use tablecard_core::Result;

/// The external document-merge capability.
pub trait DocumentComposer {
    /// Append `card` to `master`, preceded by an explicit page break.
    ///
    /// # Errors
    /// Returns a render error when the composition fails.
    fn append(&self, master: &mut RenderedCard, card: &RenderedCard) -> Result<()>;
}

/// Default composer: a page break followed by the card's blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageBreakComposer;

impl PageBreakComposer {
    /// Create a new composer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentComposer for PageBreakComposer {
    fn append(&self, master: &mut RenderedCard, card: &RenderedCard) -> Result<()> {
        master.push(CardBlock::PageBreak);
        master.extend_from(card);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(text: &str) -> RenderedCard {
        RenderedCard::new(vec![CardBlock::Heading(text.to_string())])
    }

    #[test]
    fn test_append_inserts_page_break_before_card() {
        let mut master = card("first");
        PageBreakComposer::new()
            .append(&mut master, &card("second"))
            .unwrap();

        assert_eq!(
            master.blocks(),
            &[
                CardBlock::Heading("first".to_string()),
                CardBlock::PageBreak,
                CardBlock::Heading("second".to_string()),
            ],
            "Page break must sit between the working document and the appended card"
        );
    }

    #[test]
    fn test_append_preserves_order_across_many_cards() {
        let mut master = card("a");
        let composer = PageBreakComposer::new();
        composer.append(&mut master, &card("b")).unwrap();
        composer.append(&mut master, &card("c")).unwrap();

        let text = master.plain_text();
        let a = text.find('a').unwrap();
        let b = text.find('b').unwrap();
        let c = text.find('c').unwrap();
        assert!(a < b && b < c, "Cards must appear in append order");
        assert_eq!(master.page_breaks(), 2, "One break per appended card");
    }
}
