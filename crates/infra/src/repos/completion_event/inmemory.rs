use super::ICompletionEventRepo;
use chrono::{DateTime, Utc};
use parlo_domain::{CompletionEvent, CompletionState, ID};
use std::sync::Mutex;

pub struct InMemoryCompletionEventRepo {
    events: Mutex<Vec<CompletionEvent>>,
}

impl InMemoryCompletionEventRepo {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ICompletionEventRepo for InMemoryCompletionEventRepo {
    async fn insert(&self, event: &CompletionEvent) -> anyhow::Result<()> {
        let mut events = self.events.lock().unwrap();
        events.push(event.clone());
        Ok(())
    }

    async fn find_ended_by_user_in_window(
        &self,
        user_id: &ID,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<CompletionEvent> {
        let events = self.events.lock().unwrap();
        let mut found = events
            .iter()
            .filter(|e| {
                e.user_id == *user_id
                    && e.state == CompletionState::Ended
                    && e.timestamp >= start
                    && e.timestamp < end
            })
            .cloned()
            .collect::<Vec<_>>();
        found.sort_by_key(|e| e.timestamp);
        found
    }

    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<()> {
        let mut events = self.events.lock().unwrap();
        events.retain(|e| e.user_id != *user_id);
        Ok(())
    }
}
