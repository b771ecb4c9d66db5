//! Generic record contract shared by every directory catalog.
//!
//! # Responsibility
//! - Declare which fields of a record are searchable, faceted or dated.
//! - Keep filtering logic independent of concrete record shapes.
//!
//! # Invariants
//! - `record_id` is stable for the lifetime of the record.
//! - `search_fields` never allocates new text; it only borrows record fields.

use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\D)(\d{4})(?:\D|$)").expect("valid year regex"));

/// Declares the filterable surface of a catalog record.
///
/// Implementations describe their shape; [`crate::filter::matches`] does the
/// actual matching so every directory page shares one rule set.
pub trait Record {
    /// Stable unique identifier within one catalog.
    fn record_id(&self) -> &str;

    /// Categorical value used for facet narrowing, if the record has one.
    fn facet(&self) -> Option<&str>;

    /// Year used for range bucket narrowing, if the record is dated.
    fn year(&self) -> Option<i32>;

    /// Free-text fields checked by substring search.
    fn search_fields(&self) -> Vec<&str>;

    /// Display key used by name-ordered views.
    fn sort_key(&self) -> &str;
}

/// Extracts the first standalone four-digit year from free text.
///
/// Accepts shapes such as `1948`, `2024/2025` and `Oct 24, 2024`.
pub fn extract_year(text: &str) -> Option<i32> {
    YEAR_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i32>().ok())
}
