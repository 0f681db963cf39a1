//! The render/merge pipeline.
//!
//! Renders the ordered record list into one output document: the first
//! card becomes the working document, every further card is rendered
//! standalone, persisted to a short-lived intermediate file, appended
//! behind a page break, and its intermediate removed immediately. No
//! intermediate artifact outlives its single use, on any exit path.

use std::path::{Path, PathBuf};

use crate::compose::DocumentComposer;
use crate::engine::{RenderedCard, TemplateEngine};
use tablecard_core::{CardError, ReservationRecord, Result};

/// Outcome of one generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generation {
    /// Every record was rendered and merged into the output document.
    Complete {
        /// Number of cards in the output.
        cards: usize,
    },
    /// Merge capability unavailable with multiple records present: the
    /// output contains only the first record's card.
    ///
    /// A warning-level condition, distinct from full success but not a
    /// hard failure.
    FirstCardOnly {
        /// Number of records omitted from the output.
        omitted: usize,
    },
}

impl Generation {
    /// True when the output is incomplete (degraded merge).
    #[must_use]
    pub const fn is_degraded(self) -> bool {
        matches!(self, Self::FirstCardOnly { .. })
    }
}

/// Delete-on-drop guard for an intermediate card file.
///
/// Guarantees removal on every exit path, including failures part-way
/// through a merge.
struct IntermediateCard {
    path: PathBuf,
}

impl IntermediateCard {
    fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for IntermediateCard {
    fn drop(&mut self) {
        if self.path.exists() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                log::warn!(
                    "failed to remove intermediate card {}: {e}",
                    self.path.display()
                );
            }
        }
    }
}

/// Sequentially renders records and merges them into one document.
pub struct RenderPipeline<E> {
    engine: E,
    composer: Option<Box<dyn DocumentComposer>>,
}

impl<E: TemplateEngine> RenderPipeline<E> {
    /// Create a pipeline with no merge capability (degraded mode).
    #[must_use]
    pub const fn new(engine: E) -> Self {
        Self {
            engine,
            composer: None,
        }
    }

    /// Attach the document-merge capability.
    #[must_use]
    pub fn with_composer(mut self, composer: Box<dyn DocumentComposer>) -> Self {
        self.composer = Some(composer);
        self
    }

    /// Render the ordered record list into one document at `output_path`.
    ///
    /// Output pages appear in exactly the records' order. Without a
    /// composer and with more than one record, only the first card is
    /// produced and the outcome reports the omission.
    ///
    /// # Errors
    /// Returns [`CardError::NoValidReservations`] for an empty record
    /// list and [`CardError::Render`]/[`CardError::Io`] when rendering or
    /// persistence fails; intermediates are cleaned up first.
    pub fn generate(
        &self,
        records: &[ReservationRecord],
        output_path: &Path,
    ) -> Result<Generation> {
        let Some(first) = records.first() else {
            return Err(CardError::NoValidReservations);
        };

        let mut master = self.engine.render(first)?;
        master.save(output_path)?;
        log::info!(
            "rendered card for table {} to {}",
            first.table_number,
            output_path.display()
        );

        if records.len() == 1 {
            return Ok(Generation::Complete { cards: 1 });
        }

        let Some(composer) = &self.composer else {
            log::warn!(
                "document merge unavailable; output contains only the first of {} reservations",
                records.len()
            );
            return Ok(Generation::FirstCardOnly {
                omitted: records.len() - 1,
            });
        };

        for record in &records[1..] {
            let card = self.engine.render(record)?;

            // Synthetic per-card id: table numbers may repeat within one
            // report and must never key an intermediate name.
            let intermediate = IntermediateCard::new(intermediate_path(output_path));
            card.save(intermediate.path())?;
            composer.append(&mut master, &card)?;
            log::debug!("appended card for table {}", record.table_number);
            drop(intermediate);
        }

        master.save(output_path)?;
        Ok(Generation::Complete {
            cards: records.len(),
        })
    }
}

/// Unique sibling path for one intermediate card file.
fn intermediate_path(output_path: &Path) -> PathBuf {
    let stem = output_path
        .file_stem()
        .map_or_else(|| "cards".to_string(), |s| s.to_string_lossy().into_owned());
    let id = uuid::Uuid::new_v4().simple().to_string();
    output_path.with_file_name(format!("{stem}_card_{}.docx", &id[..8]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::PageBreakComposer;
    use crate::engine::CardBlock;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct TextEngine;

    impl TemplateEngine for TextEngine {
        fn render(&self, record: &ReservationRecord) -> Result<RenderedCard> {
            Ok(RenderedCard::new(vec![CardBlock::Heading(
                record.guest_name.clone(),
            )]))
        }
    }

    struct FailingEngine;

    impl TemplateEngine for FailingEngine {
        fn render(&self, _record: &ReservationRecord) -> Result<RenderedCard> {
            Err(CardError::Render("engine unavailable".to_string()))
        }
    }

    /// Composer that records the heading of every appended card.
    #[derive(Default)]
    struct RecordingComposer {
        appended: Rc<RefCell<Vec<String>>>,
    }

    impl DocumentComposer for RecordingComposer {
        fn append(&self, master: &mut RenderedCard, card: &RenderedCard) -> Result<()> {
            if let Some(CardBlock::Heading(name)) = card.blocks().first() {
                self.appended.borrow_mut().push(name.clone());
            }
            PageBreakComposer::new().append(master, card)
        }
    }

    /// Composer that fails on every append.
    struct BrokenComposer;

    impl DocumentComposer for BrokenComposer {
        fn append(&self, _master: &mut RenderedCard, _card: &RenderedCard) -> Result<()> {
            Err(CardError::Render("composition failed".to_string()))
        }
    }

    fn records(names: &[&str]) -> Vec<ReservationRecord> {
        names
            .iter()
            .map(|name| ReservationRecord {
                guest_name: (*name).to_string(),
                table_number: "12".to_string(),
                party_size: "2".to_string(),
                ..ReservationRecord::default()
            })
            .collect()
    }

    fn intermediates_in(dir: &Path) -> Vec<PathBuf> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().contains("_card_"))
                    .unwrap_or(false)
            })
            .collect()
    }

    #[test]
    fn test_empty_record_list_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = RenderPipeline::new(TextEngine);
        let result = pipeline.generate(&[], &dir.path().join("out.docx"));
        assert!(matches!(result, Err(CardError::NoValidReservations)));
    }

    #[test]
    fn test_single_record_complete_without_composer() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.docx");

        let outcome = RenderPipeline::new(TextEngine)
            .generate(&records(&["Ms Smith"]), &output)
            .unwrap();

        assert_eq!(outcome, Generation::Complete { cards: 1 });
        assert!(!outcome.is_degraded());
        assert!(output.exists(), "Output document should be persisted");
    }

    #[test]
    fn test_merge_appends_in_source_order() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.docx");

        let appended = Rc::new(RefCell::new(Vec::new()));
        let composer = RecordingComposer {
            appended: Rc::clone(&appended),
        };
        let pipeline = RenderPipeline::new(TextEngine).with_composer(Box::new(composer));

        let outcome = pipeline
            .generate(&records(&["A", "B", "C"]), &output)
            .unwrap();

        assert_eq!(outcome, Generation::Complete { cards: 3 });
        assert_eq!(
            *appended.borrow(),
            vec!["B".to_string(), "C".to_string()],
            "Records after the first are appended in exactly source order"
        );
    }

    #[test]
    fn test_merge_leaves_no_intermediate_files() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.docx");

        RenderPipeline::new(TextEngine)
            .with_composer(Box::new(PageBreakComposer::new()))
            .generate(&records(&["A", "B", "C"]), &output)
            .unwrap();

        assert!(
            intermediates_in(dir.path()).is_empty(),
            "No intermediate per-card file may remain after success"
        );
        assert!(output.exists());
    }

    #[test]
    fn test_failed_merge_still_cleans_intermediates() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.docx");

        let result = RenderPipeline::new(TextEngine)
            .with_composer(Box::new(BrokenComposer))
            .generate(&records(&["A", "B"]), &output);

        match result {
            Err(CardError::Render(msg)) => assert!(msg.contains("composition failed")),
            other => panic!("Expected Render error, got {other:?}"),
        }
        assert!(
            intermediates_in(dir.path()).is_empty(),
            "Intermediates must be removed on the failure path too"
        );
    }

    #[test]
    fn test_degraded_mode_without_composer() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.docx");

        let outcome = RenderPipeline::new(TextEngine)
            .generate(&records(&["A", "B", "C"]), &output)
            .unwrap();

        assert_eq!(
            outcome,
            Generation::FirstCardOnly { omitted: 2 },
            "Degraded merge reports the exact omitted-record count"
        );
        assert!(outcome.is_degraded());
        assert!(
            output.exists(),
            "The first card is still produced in degraded mode"
        );
        assert!(intermediates_in(dir.path()).is_empty());
    }

    #[test]
    fn test_render_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let result =
            RenderPipeline::new(FailingEngine).generate(&records(&["A"]), &dir.path().join("o.docx"));
        assert!(matches!(result, Err(CardError::Render(_))));
    }

    #[test]
    fn test_intermediate_paths_are_unique_per_card() {
        let output = Path::new("/tmp/out.docx");
        let a = intermediate_path(output);
        let b = intermediate_path(output);
        assert_ne!(a, b, "Synthetic ids must make intermediate names unique");
        assert!(a.to_string_lossy().contains("out_card_"));
    }
}
