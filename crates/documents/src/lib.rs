//! Document variants and the factory that builds them.
//!
//! Contracts, reports and presentations share a [`DocumentRecord`] and the
//! [`DocumentOperations`] capability set, each computing its own printing cost,
//! print format and archiving eligibility. The [`DocumentFactory`] turns a type
//! tag plus optional [`DocumentParams`] into a [`Document`].
//!
//! Pure domain logic: no IO besides reading the system date, and narration goes
//! through a caller-supplied [`Narrator`].

pub mod contract;
pub mod document;
pub mod factory;
pub mod narrator;
pub mod operations;
pub mod params;
pub mod presentation;
pub mod record;
pub mod report;

pub use contract::Contract;
pub use document::Document;
pub use factory::DocumentFactory;
pub use narrator::{Narrator, TracingNarrator};
pub use operations::{DOCUMENT_STANDARD, DocumentOperations, document_standard};
pub use params::DocumentParams;
pub use presentation::Presentation;
pub use record::DocumentRecord;
pub use report::Report;
