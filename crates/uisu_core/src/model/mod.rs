//! Directory record model for the union archive.
//!
//! # Responsibility
//! - Define the concrete record shapes behind each directory page.
//! - Declare, per shape, which fields are searchable, faceted and dated.
//!
//! # Invariants
//! - Every record exposes a stable string id through [`record::Record`].
//! - Record values are immutable once placed in a catalog.

pub mod administration;
pub mod announcement;
pub mod club;
pub mod document;
pub mod person;
pub mod record;
pub mod tool;
