//! Filter inputs for directory views.

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Label of the bucket that places no range constraint.
pub const ALL_BUCKET_LABEL: &str = "All";

/// Named contiguous year range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RangeBucket {
    /// No range constraint.
    #[default]
    All,
    /// Ten-year range starting at the contained year, e.g. `1990` for `1990s`.
    Decade(i32),
}

/// Error returned for bucket labels that are neither `All` nor `NNNNs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketParseError(pub String);

impl Display for BucketParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid range bucket label `{}`", self.0)
    }
}

impl Error for BucketParseError {}

impl RangeBucket {
    /// Parses display labels such as `All`, `1990s`.
    ///
    /// A decade label must name a year divisible by ten whose last year
    /// still fits in an `i32`.
    pub fn parse(label: &str) -> Result<Self, BucketParseError> {
        let trimmed = label.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_BUCKET_LABEL) {
            return Ok(Self::All);
        }

        let digits = trimmed
            .strip_suffix('s')
            .ok_or_else(|| BucketParseError(trimmed.to_string()))?;
        let start = digits
            .parse::<i32>()
            .map_err(|_| BucketParseError(trimmed.to_string()))?;
        if start % 10 != 0 || start.checked_add(9).is_none() {
            return Err(BucketParseError(trimmed.to_string()));
        }
        Ok(Self::Decade(start))
    }

    /// Display label, the inverse of [`RangeBucket::parse`].
    pub fn label(&self) -> String {
        match self {
            Self::All => ALL_BUCKET_LABEL.to_string(),
            Self::Decade(start) => format!("{start}s"),
        }
    }

    /// Inclusive year bounds, or `None` for `All`.
    pub fn bounds(&self) -> Option<(i32, i32)> {
        match self {
            Self::All => None,
            Self::Decade(start) => Some((*start, start.saturating_add(9))),
        }
    }

    /// Returns whether an optional year falls into this bucket.
    ///
    /// Undated records only match `All`.
    pub fn contains(&self, year: Option<i32>) -> bool {
        match (self.bounds(), year) {
            (None, _) => true,
            (Some((start, end)), Some(year)) => year >= start && year <= end,
            (Some(_), None) => false,
        }
    }
}

/// Complete filter input for one directory view.
///
/// # Invariants
/// - An empty `selected_facets` set means "no facet constraint".
/// - A whitespace-only `query` is equivalent to no query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub selected_facets: BTreeSet<String>,
    pub bucket: RangeBucket,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style query setter.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Builder-style facet setter; adds one value to the selection.
    pub fn with_facet(mut self, facet: impl Into<String>) -> Self {
        self.selected_facets.insert(facet.into());
        self
    }

    pub fn with_bucket(mut self, bucket: RangeBucket) -> Self {
        self.bucket = bucket;
        self
    }

    /// Adds the facet when absent, removes it when present.
    ///
    /// Returns whether the facet is selected after the call.
    pub fn toggle_facet(&mut self, facet: impl Into<String>) -> bool {
        let facet = facet.into();
        if self.selected_facets.remove(&facet) {
            false
        } else {
            self.selected_facets.insert(facet);
            true
        }
    }

    /// Query after trimming; `None` when blank.
    pub fn normalized_query(&self) -> Option<String> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    /// Returns whether this state places no constraint at all.
    pub fn is_neutral(&self) -> bool {
        self.normalized_query().is_none()
            && self.selected_facets.is_empty()
            && self.bucket == RangeBucket::All
    }
}
