use crate::model::{display_or_na, Identifiable, Named, ResourceRecord};
use serde::{Deserialize, Serialize};

/// One logged exercise session: who did what, for how long.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub activity: Option<String>,
    /// Duration in minutes.
    #[serde(default)]
    pub duration: Option<u32>,
}

impl Activity {
    pub fn user_label(&self) -> &str {
        display_or_na(self.user.as_deref())
    }

    pub fn duration_label(&self) -> String {
        match self.duration {
            Some(minutes) => format!("{} min", minutes),
            None => "N/A".to_string(),
        }
    }
}

impl Identifiable for Activity {
    fn identifier(&self) -> &str {
        &self.id
    }
}

impl Named for Activity {
    fn name(&self) -> String {
        display_or_na(self.activity.as_deref()).to_string()
    }
}

impl ResourceRecord for Activity {
    const PATH: &'static str = "activities";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_record() {
        let activity: Activity = serde_json::from_str(
            r#"{"id": "1", "user": "Superman", "activity": "Flying", "duration": 120}"#,
        )
        .unwrap();
        assert_eq!(activity.identifier(), "1");
        assert_eq!(activity.user_label(), "Superman");
        assert_eq!(activity.name(), "Flying");
        assert_eq!(activity.duration_label(), "120 min");
    }

    #[test]
    fn tolerates_missing_fields() {
        let activity: Activity = serde_json::from_str(r#"{"_id": "abc123"}"#).unwrap();
        assert_eq!(activity.identifier(), "abc123");
        assert_eq!(activity.user_label(), "N/A");
        assert_eq!(activity.name(), "N/A");
        assert_eq!(activity.duration_label(), "N/A");
    }
}
