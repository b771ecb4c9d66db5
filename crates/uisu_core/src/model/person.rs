//! Current union officials.

use crate::model::record::Record;
use serde::{Deserialize, Serialize};

/// Arm of the union an official belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonCategory {
    /// Central Executive Council.
    #[serde(rename = "CEC")]
    Cec,
    /// Students' Representative Council.
    #[serde(rename = "SRC")]
    Src,
    Judiciary,
}

impl PersonCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cec => "CEC",
            Self::Src => "SRC",
            Self::Judiciary => "Judiciary",
        }
    }
}

/// One official listed on the people page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub role: String,
    /// Hall or faculty represented; set for SRC members.
    pub constituency: Option<String>,
    pub category: PersonCategory,
    #[serde(default)]
    pub is_principal: bool,
    #[serde(default)]
    pub is_majority_leader: bool,
    pub bio: Option<String>,
}

impl Person {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        category: PersonCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            constituency: None,
            category,
            is_principal: false,
            is_majority_leader: false,
            bio: None,
        }
    }
}

impl Record for Person {
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
        let mut fields = vec![self.name.as_str(), self.role.as_str()];
        if let Some(constituency) = self.constituency.as_deref() {
            fields.push(constituency);
        }
        fields
    }

    fn sort_key(&self) -> &str {
        &self.name
    }
}

/// People view split into the three display tiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonGroups<'a> {
    pub principals: Vec<&'a Person>,
    pub majority_leaders: Vec<&'a Person>,
    pub others: Vec<&'a Person>,
}

/// Splits an already filtered view into tiers, preserving view order.
///
/// A person flagged as principal is never repeated in the majority tier.
pub fn group_people<'a>(view: &[&'a Person]) -> PersonGroups<'a> {
    let mut groups = PersonGroups::default();
    for person in view {
        if person.is_principal {
            groups.principals.push(person);
        } else if person.is_majority_leader {
            groups.majority_leaders.push(person);
        } else {
            groups.others.push(person);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::{group_people, Person, PersonCategory};

    #[test]
    fn group_people_keeps_order_within_tiers() {
        let mut speaker = Person::new("src-1", "Rt. Hon. Busari", "Speaker", PersonCategory::Src);
        speaker.is_principal = true;
        let member_a = Person::new("src-m-1", "Hon. Funke", "Member", PersonCategory::Src);
        let mut whip = Person::new("src-ml-2", "Hon. Chinedu", "Chief Whip", PersonCategory::Src);
        whip.is_majority_leader = true;
        let member_b = Person::new("src-m-2", "Hon. Ibrahim", "Member", PersonCategory::Src);

        let view = vec![&member_a, &speaker, &whip, &member_b];
        let groups = group_people(&view);

        assert_eq!(groups.principals.len(), 1);
        assert_eq!(groups.majority_leaders[0].id, "src-ml-2");
        let others: Vec<_> = groups.others.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(others, vec!["src-m-1", "src-m-2"]);
    }
}
