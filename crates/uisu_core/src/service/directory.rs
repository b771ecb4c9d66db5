//! Directory view session.
//!
//! # Responsibility
//! - Own one catalog together with its filter, order and selection state.
//! - Give every directory page the same mount/interact/unmount lifecycle.
//!
//! # Invariants
//! - Filter and selection state start neutral on mount and are discarded on
//!   unmount.
//! - `visible()` is recomputed from scratch on every call.

use crate::catalog::{Catalog, CatalogResult};
use crate::filter::{derive_view, BucketParseError, FilterState, RangeBucket, SortOrder};
use crate::model::record::Record;
use crate::selection::{resolve_detail, DetailView, SelectionState};
use log::debug;

/// Explicit per-view store replacing page-local state.
#[derive(Debug, Clone)]
pub struct DirectorySession<R: Record> {
    catalog: Catalog<R>,
    filter: FilterState,
    order: SortOrder,
    selection: SelectionState,
}

impl<R: Record> DirectorySession<R> {
    /// Starts a session over `catalog` with neutral filter and insertion order.
    pub fn mount(catalog: Catalog<R>) -> Self {
        debug!(
            "event=directory_mount module=service status=ok count={}",
            catalog.len()
        );
        Self {
            catalog,
            filter: FilterState::default(),
            order: SortOrder::Insertion,
            selection: SelectionState::default(),
        }
    }

    /// Ends the session, dropping filter and selection state.
    pub fn unmount(self) -> Catalog<R> {
        self.catalog
    }

    pub fn catalog(&self) -> &Catalog<R> {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    /// Toggles one facet value; returns whether it is now selected.
    pub fn toggle_facet(&mut self, facet: impl Into<String>) -> bool {
        self.filter.toggle_facet(facet)
    }

    pub fn clear_facets(&mut self) {
        self.filter.selected_facets.clear();
    }

    pub fn set_bucket(&mut self, bucket: RangeBucket) {
        self.filter.bucket = bucket;
    }

    /// Sets the bucket from a display label such as `1970s` or `All`.
    ///
    /// Leaves the current bucket untouched when the label is invalid.
    pub fn set_bucket_label(&mut self, label: &str) -> Result<(), BucketParseError> {
        self.filter.bucket = RangeBucket::parse(label)?;
        Ok(())
    }

    pub fn set_order(&mut self, order: SortOrder) {
        self.order = order;
    }

    /// Restores the neutral filter without touching selection.
    pub fn reset_filter(&mut self) {
        self.filter = FilterState::default();
    }

    /// Current derived view.
    pub fn visible(&self) -> Vec<&R> {
        derive_view(&self.catalog, &self.filter, self.order)
    }

    pub fn select(&mut self, id: &str) -> bool {
        self.selection.select(&self.catalog, id)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn detail(&self) -> DetailView<'_, R> {
        self.selection.detail(&self.catalog)
    }

    /// Resolves an id coming from outside this session's selection.
    pub fn open_detail<'a>(&'a self, id: &'a str) -> DetailView<'a, R> {
        resolve_detail(&self.catalog, id)
    }

    pub(crate) fn insert_front(&mut self, record: R) -> CatalogResult<&R> {
        self.catalog.push_front(record)
    }
}
