//! Ordered in-memory catalogs of directory records.
//!
//! # Responsibility
//! - Own the backing collection for one directory page.
//! - Guard identifier uniqueness for the whole catalog lifetime.
//!
//! # Invariants
//! - Iteration order equals display default order.
//! - No two records share a `record_id`.
//! - Records are never removed or edited in place; catalogs only grow.

use crate::model::record::Record;
use log::debug;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod seed;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog construction and insertion error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Another record already uses this identifier.
    DuplicateId(String),
    /// Identifier is blank.
    EmptyId,
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate record id: `{id}`"),
            Self::EmptyId => write!(f, "record id cannot be empty"),
        }
    }
}

impl Error for CatalogError {}

/// Append-only ordered record collection with an id index.
#[derive(Debug, Clone)]
pub struct Catalog<R: Record> {
    records: Vec<R>,
    index: HashMap<String, usize>,
}

impl<R: Record> Default for Catalog<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<R: Record> Catalog<R> {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from records in display order.
    ///
    /// # Errors
    /// - `DuplicateId` when two records share an id.
    /// - `EmptyId` when a record id is blank.
    pub fn from_records(records: impl IntoIterator<Item = R>) -> CatalogResult<Self> {
        let mut catalog = Self::new();
        for record in records {
            catalog.push(record)?;
        }
        debug!(
            "event=catalog_build module=catalog status=ok count={}",
            catalog.len()
        );
        Ok(catalog)
    }

    /// Appends one record at the end of display order.
    pub fn push(&mut self, record: R) -> CatalogResult<()> {
        self.check_insertable(&record)?;
        self.index
            .insert(record.record_id().to_string(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Inserts one record at the front of display order.
    ///
    /// Used by flows where the newest addition is shown first. Returns the
    /// stored record.
    pub fn push_front(&mut self, record: R) -> CatalogResult<&R> {
        self.check_insertable(&record)?;
        self.records.insert(0, record);
        self.rebuild_index();
        Ok(&self.records[0])
    }

    /// Looks up one record by id.
    pub fn get(&self, id: &str) -> Option<&R> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    fn check_insertable(&self, record: &R) -> CatalogResult<()> {
        let id = record.record_id();
        if id.trim().is_empty() {
            return Err(CatalogError::EmptyId);
        }
        if self.index.contains_key(id) {
            return Err(CatalogError::DuplicateId(id.to_string()));
        }
        Ok(())
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .records
            .iter()
            .enumerate()
            .map(|(position, record)| (record.record_id().to_string(), position))
            .collect();
    }
}

impl<'a, R: Record> IntoIterator for &'a Catalog<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
