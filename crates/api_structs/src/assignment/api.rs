use crate::dtos::AssignmentDTO;
use parlo_domain::{Assignment, WeekdayTag, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResponse {
    pub assignment: AssignmentDTO,
}

impl AssignmentResponse {
    pub fn new(assignment: Assignment) -> Self {
        Self {
            assignment: AssignmentDTO::new(assignment),
        }
    }
}

pub mod create_assignment {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
        pub bundle_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: String,
        #[serde(default)]
        pub schedule: Option<Vec<WeekdayTag>>,
    }

    pub type APIResponse = AssignmentResponse;
}

pub mod update_assignment {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
        pub bundle_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub schedule: Vec<WeekdayTag>,
    }

    pub type APIResponse = AssignmentResponse;
}

pub mod remove_assignment {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
        pub bundle_id: ID,
    }

    pub type APIResponse = AssignmentResponse;
}

pub mod get_user_assignments {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub assignments: Vec<AssignmentDTO>,
    }

    impl APIResponse {
        pub fn new(assignments: Vec<Assignment>) -> Self {
            Self {
                assignments: assignments.into_iter().map(AssignmentDTO::new).collect(),
            }
        }
    }
}
