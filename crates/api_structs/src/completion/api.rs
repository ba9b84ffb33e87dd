use crate::dtos::CompletionEventDTO;
use chrono::{DateTime, Utc};
use parlo_domain::{CompletionEvent, CompletionState, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEventResponse {
    pub event: CompletionEventDTO,
}

impl CompletionEventResponse {
    pub fn new(event: CompletionEvent) -> Self {
        Self {
            event: CompletionEventDTO::new(event),
        }
    }
}

pub mod record_completion {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
        pub bundle_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub state: CompletionState,
        pub step_reached: i64,
        pub timestamp: DateTime<Utc>,
    }

    pub type APIResponse = CompletionEventResponse;
}
