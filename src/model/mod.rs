mod activity;
mod dialog;
mod identifiable;
mod leaderboard;
mod named;
mod record;
mod roster;
mod team;
mod user;
mod workout;

pub use activity::Activity;
pub use dialog::DialogState;
pub use identifiable::Identifiable;
pub use leaderboard::{LeaderboardEntry, RankBadge};
pub use named::Named;
pub use record::{display_or_na, ResourceRecord};
pub use roster::{Roster, RosterAction};
pub use team::Team;
pub use user::User;
pub use workout::{Difficulty, Workout};
