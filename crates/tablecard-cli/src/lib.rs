//! Process facade for card generation.
//!
//! Wires the report parser to the render pipeline behind one entry point:
//! raw report bytes in, one finished document out. The web or CLI layer
//! above this owns file naming and user-facing messages; this facade owns
//! nothing but the sequencing.

use std::path::Path;

use tablecard_core::{CardError, Result, TemplateFamily};
use tablecard_render::{
    DocumentComposer, DocxCardEngine, Generation, PageBreakComposer, RenderPipeline,
};
use tablecard_report::parse_report;

/// Parse a report and render all reservations into one document.
///
/// Equivalent to [`process_with_composer`] with the default page-break
/// composer attached.
///
/// # Errors
/// See [`process_with_composer`].
pub fn process(
    report: &[u8],
    family: TemplateFamily,
    template_path: &Path,
    output_path: &Path,
) -> Result<Generation> {
    process_with_composer(
        report,
        family,
        template_path,
        output_path,
        Some(Box::new(PageBreakComposer::new())),
    )
}

/// Parse a report and render it with an explicit merge capability.
///
/// Passing `None` for the composer exercises the degraded single-card
/// path deterministically.
///
/// # Errors
/// Returns [`CardError::InputRead`] for undecodable reports,
/// [`CardError::NoValidReservations`] when nothing parses,
/// [`CardError::TemplateNotFound`] when the template resource is missing
/// (checked before any rendering begins), and
/// [`CardError::Render`]/[`CardError::Io`] for rendering failures.
pub fn process_with_composer(
    report: &[u8],
    family: TemplateFamily,
    template_path: &Path,
    output_path: &Path,
    composer: Option<Box<dyn DocumentComposer>>,
) -> Result<Generation> {
    let records = parse_report(report, family)?;

    if !template_path.exists() {
        return Err(CardError::TemplateNotFound(template_path.to_path_buf()));
    }

    let mut pipeline = RenderPipeline::new(DocxCardEngine::new());
    if let Some(composer) = composer {
        pipeline = pipeline.with_composer(composer);
    }

    pipeline.generate(&records, output_path)
}
