use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user directory entry.
///
/// Sourced from the backend (listing endpoint or search index) and reshaped
/// into a [`UserCard`] for rendering; never mutated by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub display_name: String,
    pub fully_qualified_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    /// Preferred human-readable name: display name, falling back to the
    /// login name when no display name is set.
    pub fn entity_name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }

    /// Display-shaped projection used by selection lists.
    pub fn to_card(&self) -> UserCard {
        UserCard {
            id: self.id,
            display_name: self.entity_name().to_string(),
            name: self.name.clone(),
            fully_qualified_name: self.fully_qualified_name.clone(),
            email: self.email.clone(),
            entity_type: "user".to_string(),
        }
    }
}

/// Display-shaped projection of a user record, used purely for rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserCard {
    pub id: Uuid,
    pub display_name: String,
    pub name: String,
    pub fully_qualified_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub entity_type: String,
}

/// Reference to an entity by id, tagged with its type.
///
/// Serializes as `{"id": "...", "type": "user"}`, the shape handed to the
/// caller when a selection is confirmed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntityReference {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub entity_type: String,
}

impl EntityReference {
    pub fn user(id: Uuid) -> Self {
        Self {
            id,
            entity_type: "user".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "jdoe".into(),
            display_name: "Jane Doe".into(),
            fully_qualified_name: "org.users.jdoe".into(),
            email: Some("jdoe@example.com".into()),
        }
    }

    #[test]
    fn user_serialization_roundtrip() {
        let user = sample_user();
        let json = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, deserialized);
    }

    #[test]
    fn user_deserializes_without_email() {
        let json = r#"{"id":"6f2c1c8e-96a4-4f52-9d51-41c7797a9d26","name":"demo","display_name":"Demo User","fully_qualified_name":"org.users.demo"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "demo");
        assert_eq!(user.email, None);
    }

    #[test]
    fn entity_name_prefers_display_name() {
        let user = sample_user();
        assert_eq!(user.entity_name(), "Jane Doe");
    }

    #[test]
    fn entity_name_falls_back_to_login_name() {
        let mut user = sample_user();
        user.display_name = String::new();
        assert_eq!(user.entity_name(), "jdoe");
    }

    #[test]
    fn to_card_tags_user_type() {
        let user = sample_user();
        let card = user.to_card();
        assert_eq!(card.id, user.id);
        assert_eq!(card.display_name, "Jane Doe");
        assert_eq!(card.fully_qualified_name, "org.users.jdoe");
        assert_eq!(card.entity_type, "user");
    }

    #[test]
    fn entity_reference_serializes_with_type_key() {
        let id = Uuid::new_v4();
        let reference = EntityReference::user(id);
        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(json["id"], serde_json::json!(id.to_string()));
        assert_eq!(json["type"], "user");
    }

    #[test]
    fn entity_reference_roundtrip() {
        let reference = EntityReference::user(Uuid::new_v4());
        let json = serde_json::to_string(&reference).unwrap();
        let parsed: EntityReference = serde_json::from_str(&json).unwrap();
        assert_eq!(reference, parsed);
    }
}
