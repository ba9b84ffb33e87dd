use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// How a bundle walkthrough run terminated. Only `Ended` runs count towards
/// covering scheduled reminder days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompletionState {
    Started,
    Ended,
}

impl CompletionState {
    pub fn as_str(self) -> &'static str {
        match self {
            CompletionState::Started => "STARTED",
            CompletionState::Ended => "ENDED",
        }
    }
}

impl Display for CompletionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum InvalidCompletionStateError {
    #[error("Invalid completion state: {0}")]
    Malformed(String),
}

impl FromStr for CompletionState {
    type Err = InvalidCompletionStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STARTED" => Ok(CompletionState::Started),
            "ENDED" => Ok(CompletionState::Ended),
            _ => Err(InvalidCompletionStateError::Malformed(s.to_string())),
        }
    }
}

/// One append-only record that a user ran through a bundle. `step_reached` is
/// the last step the user saw before the run ended. Never updated or deleted
/// once written, except when the owning user is removed.
#[derive(Debug, Clone)]
pub struct CompletionEvent {
    pub id: ID,
    pub user_id: ID,
    pub bundle_id: ID,
    pub state: CompletionState,
    pub step_reached: i64,
    pub timestamp: DateTime<Utc>,
}

impl CompletionEvent {
    pub fn new(
        user_id: ID,
        bundle_id: ID,
        state: CompletionState,
        step_reached: i64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Default::default(),
            user_id,
            bundle_id,
            state,
            step_reached,
            timestamp,
        }
    }
}

impl Entity for CompletionEvent {
    fn id(&self) -> &ID {
        &self.id
    }
}
