//! Derived view computation.

use super::{matches, FilterState};
use crate::catalog::Catalog;
use crate::model::record::Record;
use std::cmp::Ordering;

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Catalog insertion order.
    #[default]
    Insertion,
    /// Case-insensitive `sort_key` ascending.
    NameAscending,
    /// Case-insensitive `sort_key` descending.
    NameDescending,
}

impl SortOrder {
    /// Flips between ascending and descending; insertion becomes ascending.
    pub fn toggled(self) -> Self {
        match self {
            Self::NameAscending => Self::NameDescending,
            Self::Insertion | Self::NameDescending => Self::NameAscending,
        }
    }
}

/// Filters `catalog` and applies `order`.
///
/// The sort is stable, so records with equal keys keep insertion order.
pub fn derive_view<'a, R: Record>(
    catalog: &'a Catalog<R>,
    filter: &FilterState,
    order: SortOrder,
) -> Vec<&'a R> {
    match order {
        SortOrder::Insertion => catalog
            .iter()
            .filter(|record| matches(*record, filter))
            .collect(),
        SortOrder::NameAscending => derive_view_by(catalog, filter, compare_sort_keys),
        SortOrder::NameDescending => {
            derive_view_by(catalog, filter, |left, right| compare_sort_keys(right, left))
        }
    }
}

/// Filters `catalog` and orders the result with a caller comparator.
pub fn derive_view_by<'a, R, F>(
    catalog: &'a Catalog<R>,
    filter: &FilterState,
    mut compare: F,
) -> Vec<&'a R>
where
    R: Record,
    F: FnMut(&R, &R) -> Ordering,
{
    let mut view: Vec<&R> = catalog
        .iter()
        .filter(|record| matches(*record, filter))
        .collect();
    view.sort_by(|left, right| compare(*left, *right));
    view
}

fn compare_sort_keys<R: Record>(left: &R, right: &R) -> Ordering {
    left.sort_key()
        .to_lowercase()
        .cmp(&right.sort_key().to_lowercase())
}
