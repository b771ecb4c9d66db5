//! Directory page use-cases.
//!
//! # Responsibility
//! - Bind catalogs to per-view filter and selection state.
//! - Keep UI/FFI layers decoupled from view derivation details.

pub mod directory;
pub mod document_library;
pub mod tool_directory;
