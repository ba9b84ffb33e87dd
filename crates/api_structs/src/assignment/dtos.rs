use parlo_domain::{Assignment, WeekdayTag, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDTO {
    pub user_id: ID,
    pub bundle_id: ID,
    pub title: String,
    pub schedule: Vec<WeekdayTag>,
}

impl AssignmentDTO {
    pub fn new(assignment: Assignment) -> Self {
        Self {
            user_id: assignment.user_id.clone(),
            bundle_id: assignment.bundle_id.clone(),
            title: assignment.bundle_title,
            schedule: assignment.schedule,
        }
    }
}
