//! Archive document model.
//!
//! # Responsibility
//! - Define the canonical record for constitutions, bills, speeches and
//!   other archive papers.
//! - Provide declaration-level validation used by upload paths.
//!
//! # Invariants
//! - `id` is non-empty and unique within one document catalog.
//! - `title` is non-empty after trimming.

use crate::model::record::Record;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Size label assigned to documents added through the upload flow.
pub const UPLOADED_DOCUMENT_SIZE: &str = "1.5 MB";

/// Classification of an archive document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DocumentType {
    Constitution,
    Bill,
    Manifesto,
    Speech,
    Report,
    Memo,
}

impl DocumentType {
    /// All document types in display order.
    pub const ALL: [DocumentType; 6] = [
        Self::Constitution,
        Self::Bill,
        Self::Manifesto,
        Self::Speech,
        Self::Report,
        Self::Memo,
    ];

    /// Stable label used for facet values and search.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Constitution => "Constitution",
            Self::Bill => "Bill",
            Self::Manifesto => "Manifesto",
            Self::Speech => "Speech",
            Self::Report => "Report",
            Self::Memo => "Memo",
        }
    }

    /// Parses a label case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
    }
}

/// One document in the union archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveDocument {
    pub id: String,
    pub title: String,
    /// Year the document was created or published.
    pub year: i32,
    /// Serialized as `type` to match the archive's external naming.
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// Human-readable file size, e.g. `2.4 MB`.
    pub size: String,
    pub description: String,
}

/// Validation error for document declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentValidationError {
    EmptyId,
    EmptyTitle,
}

impl Display for DocumentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "document id cannot be empty"),
            Self::EmptyTitle => write!(f, "document title cannot be empty"),
        }
    }
}

impl Error for DocumentValidationError {}

impl ArchiveDocument {
    /// Creates a document with a generated identifier.
    pub fn new(
        title: impl Into<String>,
        year: i32,
        doc_type: DocumentType,
        size: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            year,
            doc_type,
            size: size.into(),
            description: description.into(),
        }
    }

    /// Checks declaration invariants.
    pub fn validate(&self) -> Result<(), DocumentValidationError> {
        if self.id.trim().is_empty() {
            return Err(DocumentValidationError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(DocumentValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Text read aloud by the narration controller.
    pub fn narration_text(&self) -> String {
        format!("Title: {}. Description: {}", self.title, self.description)
    }
}

impl Record for ArchiveDocument {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn facet(&self) -> Option<&str> {
        Some(self.doc_type.as_str())
    }

    fn year(&self) -> Option<i32> {
        Some(self.year)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.doc_type.as_str(),
            self.description.as_str(),
        ]
    }

    fn sort_key(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::{ArchiveDocument, DocumentType, DocumentValidationError};

    #[test]
    fn parse_accepts_any_case() {
        assert_eq!(DocumentType::parse(" bill "), Some(DocumentType::Bill));
        assert_eq!(DocumentType::parse("MEMO"), Some(DocumentType::Memo));
        assert_eq!(DocumentType::parse("letter"), None);
    }

    #[test]
    fn validate_rejects_blank_title() {
        let doc = ArchiveDocument::new("  ", 1990, DocumentType::Memo, "1 KB", "");
        assert_eq!(doc.validate(), Err(DocumentValidationError::EmptyTitle));
    }
}
