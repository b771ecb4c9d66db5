//! Club and society directory model.

use crate::model::record::{extract_year, Record};
use serde::{Deserialize, Serialize};

/// Directory category for clubs and societies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClubCategory {
    Sociocultural,
    Academic,
    Religious,
    Press,
    Tech,
    Sports,
    Politics,
}

impl ClubCategory {
    pub const ALL: [ClubCategory; 7] = [
        Self::Sociocultural,
        Self::Academic,
        Self::Religious,
        Self::Press,
        Self::Tech,
        Self::Sports,
        Self::Politics,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sociocultural => "Sociocultural",
            Self::Academic => "Academic",
            Self::Religious => "Religious",
            Self::Press => "Press",
            Self::Tech => "Tech",
            Self::Sports => "Sports",
            Self::Politics => "Politics",
        }
    }
}

/// A student club, society or association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub id: String,
    pub name: String,
    pub acronym: Option<String>,
    pub category: ClubCategory,
    /// Founding year as written in the source material (may be approximate).
    pub founded: String,
    pub motto: String,
    pub description: String,
    pub activities: Vec<String>,
    pub president: Option<String>,
}

impl Club {
    /// Creates a club with empty optional metadata.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: ClubCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            acronym: None,
            category,
            founded: String::new(),
            motto: String::new(),
            description: String::new(),
            activities: Vec::new(),
            president: None,
        }
    }
}

impl Record for Club {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn facet(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn year(&self) -> Option<i32> {
        extract_year(&self.founded)
    }

    // Only name and acronym are searchable in the directory.
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(acronym) = self.acronym.as_deref() {
            fields.push(acronym);
        }
        fields
    }

    fn sort_key(&self) -> &str {
        &self.name
    }
}
