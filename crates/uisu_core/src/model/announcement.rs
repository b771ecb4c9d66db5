//! Announcement feed model.

use crate::model::record::{extract_year, Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnouncementCategory {
    News,
    Event,
    Memo,
    Urgent,
}

impl AnnouncementCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::News => "News",
            Self::Event => "Event",
            Self::Memo => "Memo",
            Self::Urgent => "Urgent",
        }
    }
}

/// One announcement, memo or event notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    /// Publication date as displayed, e.g. `Oct 24, 2024`.
    pub date: String,
    pub category: AnnouncementCategory,
    /// Short text for list rows.
    pub summary: String,
    /// Full text for the detail view.
    pub content: String,
    pub author: String,
}

impl Record for Announcement {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn facet(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn year(&self) -> Option<i32> {
        extract_year(&self.date)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.summary.as_str()]
    }

    fn sort_key(&self) -> &str {
        &self.title
    }
}
