//! Past union administrations.
//!
//! # Invariants
//! - `session` doubles as the record id and is unique per catalog.
//! - Only one administration is expected to be `Active` at a time; this is a
//!   content convention and is not enforced here.

use crate::model::record::{extract_year, Record};
use serde::{Deserialize, Serialize};

/// Outcome of an administration's tenure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdministrationStatus {
    Completed,
    Suspended,
    Impeached,
    Active,
}

impl AdministrationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Suspended => "Suspended",
            Self::Impeached => "Impeached",
            Self::Active => "Active",
        }
    }
}

/// Member of an executive council.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutiveMember {
    pub role: String,
    pub name: String,
    pub alias: Option<String>,
}

/// One union administration tenure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Administration {
    /// Academic session, e.g. `2023/2024`.
    pub session: String,
    pub president: String,
    pub alias: String,
    pub motto: String,
    pub notable_events: String,
    pub status: AdministrationStatus,
    pub team: Vec<ExecutiveMember>,
}

impl Record for Administration {
    fn record_id(&self) -> &str {
        &self.session
    }

    fn facet(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn year(&self) -> Option<i32> {
        extract_year(&self.session)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.president.as_str(),
            self.session.as_str(),
            self.alias.as_str(),
        ]
    }

    fn sort_key(&self) -> &str {
        &self.president
    }
}
