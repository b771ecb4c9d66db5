//! Tool registry entries shown on the tools page.

use crate::model::record::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolCategory {
    Academic,
    Utility,
    Health,
    Logistics,
    Research,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 5] = [
        Self::Academic,
        Self::Utility,
        Self::Health,
        Self::Logistics,
        Self::Research,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Academic => "Academic",
            Self::Utility => "Utility",
            Self::Health => "Health",
            Self::Logistics => "Logistics",
            Self::Research => "Research",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
    }
}

/// Declaration of one utility tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Stable id used to open the tool, e.g. `gpa`.
    pub id: String,
    pub name: String,
    pub category: ToolCategory,
    pub description: String,
}

impl ToolDefinition {
    pub fn new(id: &str, name: &str, category: ToolCategory, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            description: description.to_string(),
        }
    }
}

impl Record for ToolDefinition {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn facet(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn year(&self) -> Option<i32> {
        None
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn sort_key(&self) -> &str {
        &self.name
    }
}
