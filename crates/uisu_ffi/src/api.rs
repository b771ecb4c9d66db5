//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Translate core errors into message strings inside response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Tool state is only read or written under known tool keys.
//! - The document library lives for the whole process; uploads stay visible
//!   to later searches until the process exits.

use log::warn;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use uisu_core::db::open_store_db;
use uisu_core::storage::clear;
use uisu_core::tools::{expression::evaluate_display, keys, notes::load_note_title};
use uisu_core::{
    core_version as core_version_inner, derive_view, init_logging as init_logging_inner, load,
    ping as ping_inner, save, ArchiveDocument, DocumentLibrary, DocumentType, FilterState,
    RangeBucket, SortOrder, SqliteStore, StoreResult, ToolCategory, ToolDefinition, ToolDirectory,
    UploadRequest,
};

const STORE_DB_FILE_NAME: &str = "uisu_local_storage.sqlite3";
const STORE_PATH_ENV: &str = "UISU_STORE_PATH";
static STORE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static DOCUMENT_LIBRARY: OnceLock<Mutex<DocumentLibrary>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Archive document row for list and detail rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentItem {
    pub id: String,
    pub title: String,
    pub year: i32,
    /// Document type label, e.g. `Constitution`.
    pub doc_type: String,
    pub size: String,
    pub description: String,
}

/// Document search envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSearchResponse {
    pub items: Vec<DocumentItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Upload result envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentActionResponse {
    pub ok: bool,
    /// Id of the created document on success.
    pub document_id: Option<String>,
    pub message: String,
}

impl DocumentActionResponse {
    fn success(message: impl Into<String>, document_id: String) -> Self {
        Self {
            ok: true,
            document_id: Some(document_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            document_id: None,
            message: message.into(),
        }
    }
}

/// Filters the document library.
///
/// Input semantics:
/// - `query`: free text over title, type and description; blank matches all.
/// - `types`: selected document type labels; empty matches all.
/// - `decade`: `All` or a decade label such as `1970s`.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; invalid input yields an empty list and a message.
#[flutter_rust_bridge::frb(sync)]
pub fn documents_search(
    query: String,
    types: Vec<String>,
    decade: String,
) -> DocumentSearchResponse {
    let bucket = match RangeBucket::parse(&decade) {
        Ok(bucket) => bucket,
        Err(err) => {
            return DocumentSearchResponse::failure(format!("documents_search failed: {err}"))
        }
    };
    let mut filter = FilterState::new().with_query(query).with_bucket(bucket);
    for label in &types {
        match DocumentType::parse(label) {
            Some(doc_type) => filter.selected_facets.insert(doc_type.as_str().to_string()),
            None => {
                return DocumentSearchResponse::failure(format!(
                    "documents_search failed: unsupported document type `{label}`"
                ))
            }
        };
    }

    match with_library(|library| {
        derive_view(library.catalog(), &filter, SortOrder::Insertion)
            .into_iter()
            .map(to_document_item)
            .collect::<Vec<_>>()
    }) {
        Ok(items) => {
            let message = if items.is_empty() {
                "No results.".to_string()
            } else {
                format!("Found {} result(s).", items.len())
            };
            DocumentSearchResponse { items, message }
        }
        Err(err) => DocumentSearchResponse::failure(format!("documents_search failed: {err}")),
    }
}

impl DocumentSearchResponse {
    fn failure(message: String) -> Self {
        Self {
            items: Vec::new(),
            message,
        }
    }
}

/// Adds a document from the upload form.
///
/// Input semantics:
/// - `title`: required after trimming.
/// - `year`: free text; non-numeric falls back to `current_year`.
/// - `doc_type`: type label; blank means `Report`.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; returns the new document id on success.
#[flutter_rust_bridge::frb(sync)]
pub fn documents_upload(
    title: String,
    year: String,
    doc_type: String,
    description: String,
    current_year: i32,
) -> DocumentActionResponse {
    let doc_type = if doc_type.trim().is_empty() {
        None
    } else {
        match DocumentType::parse(&doc_type) {
            Some(parsed) => Some(parsed),
            None => {
                return DocumentActionResponse::failure(format!(
                    "documents_upload failed: unsupported document type `{}`",
                    doc_type.trim()
                ))
            }
        }
    };
    let request = UploadRequest {
        title,
        year,
        doc_type,
        description,
    };

    match with_library(|library| {
        library
            .upload(&request, current_year)
            .map(|document| document.id.clone())
    }) {
        Ok(Ok(id)) => DocumentActionResponse::success("Document archived.", id),
        Ok(Err(err)) => DocumentActionResponse::failure(format!("documents_upload failed: {err}")),
        Err(err) => DocumentActionResponse::failure(format!("documents_upload failed: {err}")),
    }
}

/// Tool registry row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
}

/// Filters the tool registry by name and category tab.
///
/// `category` is `None` or `All` for every category; `descending` flips
/// name order.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; an unknown category yields an empty list.
#[flutter_rust_bridge::frb(sync)]
pub fn tools_search(query: String, category: Option<String>, descending: bool) -> Vec<ToolItem> {
    let category = match category.as_deref().map(str::trim) {
        None | Some("") | Some("All") => None,
        Some(label) => match ToolCategory::parse(label) {
            Some(category) => Some(category),
            None => return Vec::new(),
        },
    };
    let mut directory = ToolDirectory::open();
    directory.set_category(category);
    directory.set_query(query);
    if descending {
        directory.toggle_order();
    }
    directory.visible().into_iter().map(to_tool_item).collect()
}

/// Tool state envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStateResponse {
    pub ok: bool,
    /// Current value as JSON text; `null` when nothing usable is stored.
    pub value_json: String,
    pub message: String,
}

impl ToolStateResponse {
    fn success(value_json: String) -> Self {
        Self {
            ok: true,
            value_json,
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            value_json: Value::Null.to_string(),
            message: message.into(),
        }
    }
}

/// Reads one tool's stored state.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; unreadable or corrupted state reads as `null`.
#[flutter_rust_bridge::frb(sync)]
pub fn tool_state_load(key: String) -> ToolStateResponse {
    let loaded = with_store(&key, |store| {
        if key == keys::NOTE_TITLE {
            return Ok(Value::String(load_note_title(&*store)));
        }
        Ok(load(&*store, &key, Value::Null))
    });
    match loaded {
        Ok(value) => ToolStateResponse::success(value.to_string()),
        Err(err) => ToolStateResponse::failure(format!("tool_state_load failed: {err}")),
    }
}

/// Replaces one tool's stored state with `value_json`.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; invalid JSON is rejected without writing.
#[flutter_rust_bridge::frb(sync)]
pub fn tool_state_save(key: String, value_json: String) -> ToolStateResponse {
    let value: Value = match serde_json::from_str(&value_json) {
        Ok(value) => value,
        Err(err) => return ToolStateResponse::failure(format!("tool_state_save failed: {err}")),
    };
    match with_store(&key, |store| save(store, &key, &value)) {
        Ok(()) => ToolStateResponse::success(value.to_string()),
        Err(err) => ToolStateResponse::failure(format!("tool_state_save failed: {err}")),
    }
}

/// Removes one tool's stored state.
#[flutter_rust_bridge::frb(sync)]
pub fn tool_state_reset(key: String) -> ToolStateResponse {
    match with_store(&key, |store| clear(store, &key)) {
        Ok(()) => ToolStateResponse::success(Value::Null.to_string()),
        Err(err) => ToolStateResponse::failure(format!("tool_state_reset failed: {err}")),
    }
}

/// Evaluates a calculator pad expression; invalid input returns `Error`.
#[flutter_rust_bridge::frb(sync)]
pub fn calculator_evaluate(expression: String) -> String {
    evaluate_display(&expression)
}

fn resolve_store_db_path() -> PathBuf {
    STORE_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(STORE_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(STORE_DB_FILE_NAME)
        })
        .clone()
}

fn with_store<T>(
    key: &str,
    f: impl FnOnce(&mut SqliteStore<'_>) -> StoreResult<T>,
) -> Result<T, String> {
    if !keys::is_known(key) {
        return Err(format!("unknown tool key `{key}`"));
    }
    let conn = open_store_db(resolve_store_db_path())
        .map_err(|err| format!("store DB open failed: {err}"))?;
    let mut store = SqliteStore::new(&conn);
    f(&mut store).map_err(|err| err.to_string())
}

fn with_library<T>(f: impl FnOnce(&mut DocumentLibrary) -> T) -> Result<T, String> {
    let library = DOCUMENT_LIBRARY.get_or_init(|| Mutex::new(DocumentLibrary::open()));
    let mut guard = library.lock().map_err(|_| {
        warn!("event=document_library_lock module=ffi status=error error_code=poisoned");
        "document library is unavailable".to_string()
    })?;
    Ok(f(&mut *guard))
}

fn to_document_item(document: &ArchiveDocument) -> DocumentItem {
    DocumentItem {
        id: document.id.clone(),
        title: document.title.clone(),
        year: document.year,
        doc_type: document.doc_type.as_str().to_string(),
        size: document.size.clone(),
        description: document.description.clone(),
    }
}

fn to_tool_item(tool: &ToolDefinition) -> ToolItem {
    ToolItem {
        id: tool.id.clone(),
        name: tool.name.clone(),
        category: tool.category.as_str().to_string(),
        description: tool.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        calculator_evaluate, core_version, documents_search, documents_upload, init_logging, ping,
        tool_state_load, tool_state_reset, tool_state_save, tools_search,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn documents_search_filters_by_decade() {
        let response = documents_search(String::new(), Vec::new(), "1970s".to_string());
        assert!(response.items.iter().all(|item| (1970..=1979).contains(&item.year)));
        assert!(response.items.iter().any(|item| item.year == 1978));
    }

    #[test]
    fn documents_search_rejects_unknown_inputs() {
        let response = documents_search(String::new(), Vec::new(), "ancient".to_string());
        assert!(response.items.is_empty());
        assert!(response.message.contains("documents_search failed"));

        let response = documents_search(String::new(), vec!["Poem".to_string()], "All".to_string());
        assert!(response.items.is_empty());
    }

    #[test]
    fn documents_search_survives_out_of_range_decade() {
        let response = documents_search(String::new(), Vec::new(), "2147483640s".to_string());
        assert!(response.items.is_empty());
        assert!(response.message.contains("invalid range bucket label"));

        let response = documents_search(String::new(), Vec::new(), "All".to_string());
        assert!(!response.items.is_empty(), "{}", response.message);
    }

    #[test]
    fn documents_upload_is_searchable_afterwards() {
        let title = unique_token("ffi-upload");
        let created = documents_upload(
            title.clone(),
            "not a year".to_string(),
            String::new(),
            String::new(),
            2031,
        );
        assert!(created.ok, "{}", created.message);

        let response = documents_search(title, vec!["report".to_string()], "2030s".to_string());
        assert_eq!(response.items.len(), 1);
        assert_eq!(Some(&response.items[0].id), created.document_id.as_ref());
        assert_eq!(response.items[0].size, "1.5 MB");
    }

    #[test]
    fn documents_upload_requires_title() {
        let response = documents_upload(
            "   ".to_string(),
            "1999".to_string(),
            "Memo".to_string(),
            String::new(),
            2024,
        );
        assert!(!response.ok);
        assert!(response.document_id.is_none());
    }

    #[test]
    fn tools_search_filters_and_orders() {
        let academic = tools_search(String::new(), Some("Academic".to_string()), false);
        assert!(!academic.is_empty());
        assert!(academic.iter().all(|tool| tool.category == "Academic"));

        let ascending = tools_search(String::new(), None, false);
        let descending = tools_search(String::new(), Some("All".to_string()), true);
        assert_eq!(ascending.len(), descending.len());
        assert_eq!(ascending.first(), descending.last());

        assert!(tools_search(String::new(), Some("Gaming".to_string()), false).is_empty());
    }

    #[test]
    fn tool_state_round_trips_and_resets() {
        let saved = tool_state_save(
            "matrix_timetable".to_string(),
            r#"{"Monday-8:00":"GSP 101"}"#.to_string(),
        );
        assert!(saved.ok, "{}", saved.message);

        let loaded = tool_state_load("matrix_timetable".to_string());
        assert!(loaded.ok, "{}", loaded.message);
        assert_eq!(loaded.value_json, r#"{"Monday-8:00":"GSP 101"}"#);

        assert!(tool_state_reset("matrix_timetable".to_string()).ok);
        assert_eq!(tool_state_load("matrix_timetable".to_string()).value_json, "null");
    }

    #[test]
    fn tool_state_rejects_unknown_key_and_bad_json() {
        assert!(!tool_state_load("session_token".to_string()).ok);
        assert!(!tool_state_save("matrix_tasks".to_string(), "{oops".to_string()).ok);
    }

    #[test]
    fn calculator_evaluate_reports_errors() {
        assert_eq!(calculator_evaluate("2*(3+4)".to_string()), "14");
        assert_eq!(calculator_evaluate("4/0".to_string()), "Error");
        assert_eq!(calculator_evaluate(format!("{}1", "(".repeat(100_000))), "Error");
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
