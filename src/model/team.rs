use crate::model::{display_or_na, Identifiable, Named, ResourceRecord};
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub members: Option<Vec<String>>,
}

impl Team {
    pub fn description_label(&self) -> &str {
        display_or_na(self.description.as_deref())
    }

    pub fn member_count_label(&self) -> String {
        match &self.members {
            Some(members) => members.len().to_string(),
            None => "N/A".to_string(),
        }
    }

    pub fn member_names(&self) -> &[String] {
        self.members.as_deref().unwrap_or(&[])
    }
}

impl Identifiable for Team {
    fn identifier(&self) -> &str {
        &self.id
    }
}

impl Named for Team {
    fn name(&self) -> String {
        display_or_na(self.name.as_deref()).to_string()
    }
}

impl ResourceRecord for Team {
    const PATH: &'static str = "teams";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_members_when_present() {
        let team: Team = serde_json::from_str(
            r#"{"id": "1", "name": "marvel", "members": ["Iron Man", "Black Widow"]}"#,
        )
        .unwrap();
        assert_eq!(team.member_count_label(), "2");
        assert_eq!(team.member_names().len(), 2);
    }

    #[test]
    fn absent_members_render_placeholder() {
        let team: Team = serde_json::from_str(r#"{"id": "2", "name": "dc"}"#).unwrap();
        assert_eq!(team.member_count_label(), "N/A");
        assert!(team.member_names().is_empty());
        assert_eq!(team.description_label(), "N/A");
    }
}
