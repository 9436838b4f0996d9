use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::User;

/// A team with its member roster loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub members: Vec<User>,
}

impl Team {
    /// Identifiers of the current members, in roster order.
    pub fn member_ids(&self) -> Vec<Uuid> {
        self.members.iter().map(|m| m.id).collect()
    }
}

/// Team row for the list page (roster not loaded).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct TeamSummary {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub member_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_members_default_to_empty() {
        let json = r#"{"id":"0a6f3c62-2f1e-44a0-91cf-6cf61c0e2f0f","name":"Platform","created_at":"2026-01-10T08:30:00Z"}"#;
        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.name, "Platform");
        assert!(team.members.is_empty());
        assert!(team.member_ids().is_empty());
    }

    #[test]
    fn team_summary_roundtrip() {
        let summary = TeamSummary {
            id: Uuid::new_v4(),
            name: "Data".into(),
            description: Some("Data engineering".into()),
            member_count: 7,
        };
        let json = serde_json::to_string(&summary).unwrap();
        let parsed: TeamSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, parsed);
    }
}
