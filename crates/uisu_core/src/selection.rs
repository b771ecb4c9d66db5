//! Single-record selection for detail views.
//!
//! # Responsibility
//! - Track which record, if any, is expanded in a detail view.
//! - Resolve ids into a render-ready detail outcome.
//!
//! # Invariants
//! - At most one id is active; selecting replaces the previous id.
//! - Selecting an id missing from the catalog leaves state unchanged.
//! - Resolving an unknown id yields `DetailView::NotFound`, never a panic.

use crate::catalog::Catalog;
use crate::model::record::Record;
use log::debug;

/// Outcome of resolving a selection for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailView<'a, R> {
    /// Nothing selected; the detail panel is closed.
    Empty,
    Found(&'a R),
    /// The requested id has no record; render the "not found" fallback.
    NotFound(&'a str),
}

impl<'a, R> DetailView<'a, R> {
    pub fn record(&self) -> Option<&'a R> {
        match self {
            Self::Found(record) => Some(record),
            Self::Empty | Self::NotFound(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Active selection for one directory view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    active: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `id` when the catalog holds it.
    ///
    /// Returns `false` and keeps the current selection when it does not.
    pub fn select<R: Record>(&mut self, catalog: &Catalog<R>, id: &str) -> bool {
        if !catalog.contains(id) {
            debug!("event=selection_select module=selection status=skipped reason=unknown_id");
            return false;
        }
        self.active = Some(id.to_string());
        true
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Resolves the active selection against `catalog`.
    pub fn detail<'a, R: Record>(&'a self, catalog: &'a Catalog<R>) -> DetailView<'a, R> {
        match self.active.as_deref() {
            None => DetailView::Empty,
            Some(id) => resolve_detail(catalog, id),
        }
    }
}

/// Resolves an id handed over from another view, e.g. a club id picked in
/// the directory and opened on its own detail page.
pub fn resolve_detail<'a, R: Record>(catalog: &'a Catalog<R>, id: &'a str) -> DetailView<'a, R> {
    match catalog.get(id) {
        Some(record) => DetailView::Found(record),
        None => DetailView::NotFound(id),
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_detail, DetailView, SelectionState};
    use crate::catalog::Catalog;
    use crate::model::club::{Club, ClubCategory};

    fn clubs() -> Catalog<Club> {
        Catalog::from_records([
            Club::new("kuti", "Kuti Hall Press", ClubCategory::Press),
            Club::new("tlds", "Literary and Debating Society", ClubCategory::Academic),
        ])
        .unwrap()
    }

    #[test]
    fn select_replaces_previous_id() {
        let catalog = clubs();
        let mut selection = SelectionState::new();
        assert!(selection.select(&catalog, "kuti"));
        assert!(selection.select(&catalog, "tlds"));
        assert_eq!(selection.active_id(), Some("tlds"));
    }

    #[test]
    fn select_unknown_id_is_noop() {
        let catalog = clubs();
        let mut selection = SelectionState::new();
        selection.select(&catalog, "kuti");
        assert!(!selection.select(&catalog, "missing"));
        assert_eq!(selection.active_id(), Some("kuti"));
    }

    #[test]
    fn clear_closes_detail() {
        let catalog = clubs();
        let mut selection = SelectionState::new();
        selection.select(&catalog, "kuti");
        selection.clear();
        assert_eq!(selection.detail(&catalog), DetailView::Empty);
    }

    #[test]
    fn resolve_unknown_id_renders_not_found() {
        let catalog = clubs();
        let detail = resolve_detail(&catalog, "ghost-club");
        assert!(detail.is_not_found());
        assert!(detail.record().is_none());
    }
}
