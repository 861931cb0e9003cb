use crate::model::{display_or_na, Identifiable, Named, ResourceRecord};
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub suggested_for: Vec<String>,
    /// Duration in minutes.
    #[serde(default)]
    pub duration: Option<u32>,
}

impl Workout {
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::classify(&self.suggested_for)
    }

    pub fn duration_label(&self) -> String {
        match self.duration {
            Some(minutes) => format!("{} min", minutes),
            None => "N/A".to_string(),
        }
    }
}

impl Identifiable for Workout {
    fn identifier(&self) -> &str {
        &self.id
    }
}

impl Named for Workout {
    fn name(&self) -> String {
        display_or_na(self.name.as_deref()).to_string()
    }
}

impl ResourceRecord for Workout {
    const PATH: &'static str = "workouts";
}

/// Display tier for a workout, read off the suggestion roster by fixed-name
/// lookup. A display heuristic only; there is no numeric basis behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Advanced,
    Intermediate,
    Beginner,
}

impl Difficulty {
    pub fn classify(suggested_for: &[String]) -> Self {
        if suggested_for.iter().any(|name| name == "Superman") {
            Difficulty::Advanced
        } else if suggested_for.iter().any(|name| name == "Batman") {
            Difficulty::Intermediate
        } else {
            Difficulty::Beginner
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Advanced => "Advanced",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Beginner => "Beginner",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Difficulty::Advanced => "advanced",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Beginner => "beginner",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn classify_tiers() {
        assert_eq!(
            Difficulty::classify(&names(&["Superman", "Batman"])),
            Difficulty::Advanced
        );
        assert_eq!(
            Difficulty::classify(&names(&["Batman", "Wonder Woman"])),
            Difficulty::Intermediate
        );
        assert_eq!(
            Difficulty::classify(&names(&["Black Widow"])),
            Difficulty::Beginner
        );
        assert_eq!(Difficulty::classify(&[]), Difficulty::Beginner);
    }

    #[test]
    fn deserialize_with_suggestions() {
        let workout: Workout = serde_json::from_str(
            r#"{"id": "1", "name": "Strength Training", "suggested_for": ["Superman", "Iron Man"]}"#,
        )
        .unwrap();
        assert_eq!(workout.difficulty(), Difficulty::Advanced);
        assert_eq!(workout.name(), "Strength Training");
        assert_eq!(workout.duration_label(), "N/A");
    }
}
