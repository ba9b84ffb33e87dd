use chrono::{DateTime, Utc};
use parlo_domain::{CompletionEvent, CompletionState, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEventDTO {
    pub id: ID,
    pub user_id: ID,
    pub bundle_id: ID,
    pub state: CompletionState,
    pub step_reached: i64,
    pub timestamp: DateTime<Utc>,
}

impl CompletionEventDTO {
    pub fn new(event: CompletionEvent) -> Self {
        Self {
            id: event.id.clone(),
            user_id: event.user_id.clone(),
            bundle_id: event.bundle_id.clone(),
            state: event.state,
            step_reached: event.step_reached,
            timestamp: event.timestamp,
        }
    }
}
