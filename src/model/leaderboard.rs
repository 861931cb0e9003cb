use crate::model::{display_or_na, Identifiable, Named, ResourceRecord};
use serde::{Deserialize, Serialize};

/// One leaderboard row. The API has served two shapes over time, one
/// keyed by `team`/`points` and one by `name`/`score`; both are accepted
/// and the older keys win when present.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub points: Option<i64>,
    #[serde(default)]
    pub score: Option<i64>,
}

impl LeaderboardEntry {
    pub fn points_label(&self) -> String {
        match self.points.or(self.score) {
            Some(points) => points.to_string(),
            None => "N/A".to_string(),
        }
    }
}

impl Identifiable for LeaderboardEntry {
    fn identifier(&self) -> &str {
        &self.id
    }
}

impl Named for LeaderboardEntry {
    fn name(&self) -> String {
        display_or_na(self.team.as_deref().or(self.name.as_deref())).to_string()
    }
}

impl ResourceRecord for LeaderboardEntry {
    const PATH: &'static str = "leaderboard";
}

/// Rank decoration for a leaderboard row. Purely positional: the badge
/// follows the row index, never the point values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBadge {
    Champion,
    RunnerUp,
    ThirdPlace,
    Participant,
}

impl RankBadge {
    pub fn for_position(index: usize) -> Self {
        match index {
            0 => RankBadge::Champion,
            1 => RankBadge::RunnerUp,
            2 => RankBadge::ThirdPlace,
            _ => RankBadge::Participant,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RankBadge::Champion => "Champion",
            RankBadge::RunnerUp => "Runner-up",
            RankBadge::ThirdPlace => "Third Place",
            RankBadge::Participant => "Participant",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RankBadge::Champion => "champion",
            RankBadge::RunnerUp => "runner-up",
            RankBadge::ThirdPlace => "third-place",
            RankBadge::Participant => "participant",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_team_points_shape() {
        let entry: LeaderboardEntry =
            serde_json::from_str(r#"{"id": "1", "team": "marvel", "points": 300}"#).unwrap();
        assert_eq!(entry.name(), "marvel");
        assert_eq!(entry.points_label(), "300");
    }

    #[test]
    fn accepts_name_score_shape() {
        let entry: LeaderboardEntry =
            serde_json::from_str(r#"{"id": "2", "name": "dc", "score": 250}"#).unwrap();
        assert_eq!(entry.name(), "dc");
        assert_eq!(entry.points_label(), "250");
    }

    #[test]
    fn badge_is_positional_not_score_derived() {
        assert_eq!(RankBadge::for_position(0), RankBadge::Champion);
        assert_eq!(RankBadge::for_position(1), RankBadge::RunnerUp);
        assert_eq!(RankBadge::for_position(2), RankBadge::ThirdPlace);
        assert_eq!(RankBadge::for_position(3), RankBadge::Participant);
        assert_eq!(RankBadge::for_position(99), RankBadge::Participant);
    }

    #[test]
    fn badge_labels() {
        assert_eq!(RankBadge::for_position(0).label(), "Champion");
        assert_eq!(RankBadge::for_position(1).label(), "Runner-up");
        assert_eq!(RankBadge::for_position(2).label(), "Third Place");
        assert_eq!(RankBadge::for_position(7).label(), "Participant");
    }
}
