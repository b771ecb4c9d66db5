//! Core logic for the students' union archive.
//!
//! Directory catalogs, filter/search and derived views, selection state,
//! the local persistence adapter and the utility tools all live here; UI and
//! FFI layers only forward input and render output.

pub mod catalog;
pub mod db;
pub mod filter;
pub mod logging;
pub mod model;
pub mod narration;
pub mod selection;
pub mod service;
pub mod storage;
pub mod tools;

pub use catalog::{Catalog, CatalogError, CatalogResult};
pub use db::{open_store_db, open_store_db_in_memory, DbError, DbResult};
pub use filter::{derive_view, derive_view_by, matches, FilterState, RangeBucket, SortOrder};
pub use logging::{default_log_level, init_logging, LogLevel, LogSettings, LoggingError};
pub use model::document::{ArchiveDocument, DocumentType};
pub use model::record::Record;
pub use model::tool::{ToolCategory, ToolDefinition};
pub use narration::{NarrationController, SpeechSynthesizer};
pub use selection::{resolve_detail, DetailView, SelectionState};
pub use service::directory::DirectorySession;
pub use service::document_library::{DocumentLibrary, UploadError, UploadRequest};
pub use service::tool_directory::ToolDirectory;
pub use storage::{
    load, save, KeyValueStore, MemoryStore, PersistedState, SqliteStore, StoreError, StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
