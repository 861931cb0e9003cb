use crate::model::{display_or_na, Identifiable, Named, ResourceRecord};
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Two-valued affiliation label, used only for badge styling.
    #[serde(default)]
    pub team: Option<String>,
}

impl User {
    /// Prefers the flat `name` field; falls back to `first_name last_name`.
    pub fn full_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|name| !name.is_empty()) {
            return name.to_string();
        }
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            _ => "N/A".to_string(),
        }
    }

    pub fn email_label(&self) -> &str {
        display_or_na(self.email.as_deref())
    }

    pub fn team_label(&self) -> &str {
        display_or_na(self.team.as_deref())
    }

    pub fn team_css_class(&self) -> &'static str {
        match self.team.as_deref() {
            Some("marvel") => "marvel",
            Some("dc") => "dc",
            _ => "unaffiliated",
        }
    }
}

impl Identifiable for User {
    fn identifier(&self) -> &str {
        &self.id
    }
}

impl Named for User {
    fn name(&self) -> String {
        self.full_name()
    }
}

impl ResourceRecord for User {
    const PATH: &'static str = "users";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_name_wins() {
        let user: User = serde_json::from_str(
            r#"{"id": "1", "name": "Superman", "first_name": "Clark", "last_name": "Kent"}"#,
        )
        .unwrap();
        assert_eq!(user.full_name(), "Superman");
    }

    #[test]
    fn split_name_fallback() {
        let user: User =
            serde_json::from_str(r#"{"id": "2", "first_name": "Clark", "last_name": "Kent"}"#)
                .unwrap();
        assert_eq!(user.full_name(), "Clark Kent");
    }

    #[test]
    fn named_matches_full_name() {
        let split: User =
            serde_json::from_str(r#"{"id": "2", "first_name": "Clark", "last_name": "Kent"}"#)
                .unwrap();
        assert_eq!(split.name(), split.full_name());
        assert_eq!(split.name(), "Clark Kent");

        let flat: User = serde_json::from_str(r#"{"id": "1", "name": "Superman"}"#).unwrap();
        assert_eq!(flat.name(), "Superman");
    }

    #[test]
    fn no_name_at_all() {
        let user: User = serde_json::from_str(r#"{"id": "3", "email": "x@dc.com"}"#).unwrap();
        assert_eq!(user.full_name(), "N/A");
        assert_eq!(user.email_label(), "x@dc.com");
    }

    #[test]
    fn team_badge_class() {
        let marvel: User =
            serde_json::from_str(r#"{"id": "4", "team": "marvel"}"#).unwrap();
        let dc: User = serde_json::from_str(r#"{"id": "5", "team": "dc"}"#).unwrap();
        let none: User = serde_json::from_str(r#"{"id": "6"}"#).unwrap();
        assert_eq!(marvel.team_css_class(), "marvel");
        assert_eq!(dc.team_css_class(), "dc");
        assert_eq!(none.team_css_class(), "unaffiliated");
        assert_eq!(none.team_label(), "N/A");
    }
}
