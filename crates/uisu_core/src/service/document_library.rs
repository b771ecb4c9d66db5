//! Document library use-cases.
//!
//! # Responsibility
//! - Browse the archive by text, document type and decade.
//! - Synthesize new documents from the upload form.
//!
//! # Invariants
//! - Uploaded documents get a fresh UUID v4 id and are shown first.
//! - Upload never changes filter or selection state.

use crate::catalog::seed::document_archive;
use crate::catalog::{Catalog, CatalogError};
use crate::filter::RangeBucket;
use crate::model::document::{
    ArchiveDocument, DocumentType, DocumentValidationError, UPLOADED_DOCUMENT_SIZE,
};
use crate::service::directory::DirectorySession;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::{Deref, DerefMut};

/// Decades offered by the library's range selector, newest first.
pub const LIBRARY_DECADES: [RangeBucket; 9] = [
    RangeBucket::All,
    RangeBucket::Decade(2020),
    RangeBucket::Decade(2010),
    RangeBucket::Decade(2000),
    RangeBucket::Decade(1990),
    RangeBucket::Decade(1980),
    RangeBucket::Decade(1970),
    RangeBucket::Decade(1960),
    RangeBucket::Decade(1950),
];

/// Upload form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadRequest {
    pub title: String,
    /// Year as typed; non-numeric or zero falls back to the current year.
    pub year: String,
    /// Defaults to `Report` when unset.
    pub doc_type: Option<DocumentType>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    Validation(DocumentValidationError),
    Catalog(CatalogError),
}

impl Display for UploadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Catalog(err) => write!(f, "{err}"),
        }
    }
}

impl Error for UploadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Catalog(err) => Some(err),
        }
    }
}

impl From<DocumentValidationError> for UploadError {
    fn from(value: DocumentValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<CatalogError> for UploadError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

/// Archive document browser with upload support.
#[derive(Debug, Clone)]
pub struct DocumentLibrary {
    session: DirectorySession<ArchiveDocument>,
}

impl DocumentLibrary {
    /// Mounts the library over the built-in archive.
    pub fn open() -> Self {
        Self::mount(document_archive())
    }

    pub fn mount(catalog: Catalog<ArchiveDocument>) -> Self {
        Self {
            session: DirectorySession::mount(catalog),
        }
    }

    pub fn unmount(self) -> Catalog<ArchiveDocument> {
        self.session.unmount()
    }

    /// Toggles one document type in the type facet.
    pub fn toggle_type(&mut self, doc_type: DocumentType) -> bool {
        self.session.toggle_facet(doc_type.as_str())
    }

    /// Adds a document built from upload form input.
    ///
    /// Returns the stored record.
    ///
    /// # Errors
    /// - `Validation` when the trimmed title is empty.
    pub fn upload(
        &mut self,
        request: &UploadRequest,
        current_year: i32,
    ) -> Result<&ArchiveDocument, UploadError> {
        let document = ArchiveDocument::new(
            request.title.trim(),
            parse_upload_year(&request.year).unwrap_or(current_year),
            request.doc_type.unwrap_or(DocumentType::Report),
            UPLOADED_DOCUMENT_SIZE,
            request.description.trim(),
        );
        document.validate()?;

        let stored = self.session.insert_front(document)?;
        info!("event=document_upload module=service status=ok");
        Ok(stored)
    }
}

impl Deref for DocumentLibrary {
    type Target = DirectorySession<ArchiveDocument>;

    fn deref(&self) -> &Self::Target {
        &self.session
    }
}

impl DerefMut for DocumentLibrary {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.session
    }
}

// Leading-digit parse: `1999abc` -> 1999, `abc` -> None, `0` -> None.
fn parse_upload_year(text: &str) -> Option<i32> {
    let digits: String = text
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse::<i32>().ok().filter(|year| *year != 0)
}
