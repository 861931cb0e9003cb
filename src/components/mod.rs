mod activities;
mod leaderboard;
mod modal;
mod teams;
mod users;
mod workouts;

pub use activities::ActivitiesView;
pub use leaderboard::LeaderboardView;
pub use modal::Modal;
pub use teams::TeamsView;
pub use users::UsersView;
pub use workouts::WorkoutsView;
