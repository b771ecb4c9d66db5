//! Filter predicate composition and derived views.
//!
//! # Responsibility
//! - Decide per record whether it belongs to the current view.
//! - Recompute ordered views from a catalog and filter state.
//!
//! # Invariants
//! - Matching is a pure function of `(record, filter)`.
//! - Query, facet and bucket rules are combined with logical AND.

mod state;
mod view;

pub use state::{BucketParseError, FilterState, RangeBucket, ALL_BUCKET_LABEL};
pub use view::{derive_view, derive_view_by, SortOrder};

use crate::model::record::Record;

/// Returns whether `record` belongs to the view described by `filter`.
pub fn matches<R: Record + ?Sized>(record: &R, filter: &FilterState) -> bool {
    matches_query(record, filter.normalized_query().as_deref())
        && matches_facets(record, filter)
        && filter.bucket.contains(record.year())
}

fn matches_query<R: Record + ?Sized>(record: &R, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };
    record
        .search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn matches_facets<R: Record + ?Sized>(record: &R, filter: &FilterState) -> bool {
    if filter.selected_facets.is_empty() {
        return true;
    }
    record
        .facet()
        .is_some_and(|facet| filter.selected_facets.contains(facet))
}
