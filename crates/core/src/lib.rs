//! `docflow-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the document
//! variants (no IO beyond reading the system date).

pub mod clock;
pub mod entity;
pub mod error;
pub mod id;
pub mod kind;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::DocumentId;
pub use kind::DocumentKind;
