#[cfg(feature = "yew")]
pub mod components;
pub mod config;
#[cfg(feature = "yew")]
pub mod hooks;
pub mod model;
pub mod services;

pub mod prelude {
    #[cfg(feature = "yew")]
    pub use crate::components::*;
    pub use crate::config::Config;
    #[cfg(feature = "yew")]
    pub use crate::hooks::{use_resource_list, UseResourceListHandle};
    pub use crate::model::Activity;
    pub use crate::model::DialogState;
    pub use crate::model::Difficulty;
    pub use crate::model::Identifiable;
    pub use crate::model::LeaderboardEntry;
    pub use crate::model::Named;
    pub use crate::model::RankBadge;
    pub use crate::model::ResourceRecord;
    pub use crate::model::Roster;
    pub use crate::model::RosterAction;
    pub use crate::model::Team;
    pub use crate::model::User;
    pub use crate::model::Workout;
    #[cfg(feature = "yew")]
    pub use crate::services::ApiClient;
    pub use crate::services::ApiError;
}
