//! Core types for `tablecard`
//!
//! This crate holds the shared data model and error taxonomy for the card
//! generation system: [`ReservationRecord`] and its constituent types, the
//! [`TemplateFamily`] selector, and [`CardError`].
//!
//! The parsing engine lives in `tablecard-report`; rendering and merging
//! live in `tablecard-render`.

pub mod error;
pub mod record;

pub use error::{CardError, Result};
pub use record::{DishItem, ReservationRecord, TemplateFamily, TimingTag, TimingTags};
