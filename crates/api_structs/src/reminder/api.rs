use parlo_domain::ID;
use serde::Deserialize;

pub mod get_weekly_reminders {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    /// Bare array of due bundle titles
    pub type APIResponse = Vec<String>;
}
