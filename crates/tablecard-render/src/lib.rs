//! Card rendering and document merging for `tablecard`
//!
//! Consumes the ordered [`ReservationRecord`] list produced by
//! `tablecard-report` and renders one output document, one page per
//! reservation, in source order.
//!
//! The two external capabilities are trait seams:
//!
//! - [`TemplateEngine`] renders one record into a standalone card
//!   ([`DocxCardEngine`] is the default, docx-backed implementation);
//! - [`DocumentComposer`] appends cards behind page breaks
//!   ([`PageBreakComposer`] by default). A pipeline without a composer
//!   runs in degraded mode and reports [`Generation::FirstCardOnly`].
//!
//! [`ReservationRecord`]: tablecard_core::ReservationRecord

pub mod compose;
pub mod engine;
pub mod pipeline;

pub use compose::{DocumentComposer, PageBreakComposer};
pub use engine::{CardBlock, DocxCardEngine, RenderedCard, TemplateEngine};
pub use pipeline::{Generation, RenderPipeline};
