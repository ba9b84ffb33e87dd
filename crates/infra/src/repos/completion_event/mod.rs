mod inmemory;
mod postgres;

use chrono::{DateTime, Utc};
pub use inmemory::InMemoryCompletionEventRepo;
use parlo_domain::{CompletionEvent, ID};
pub use postgres::PostgresCompletionEventRepo;

#[async_trait::async_trait]
pub trait ICompletionEventRepo: Send + Sync {
    /// Append-only insert, the log is never updated
    async fn insert(&self, event: &CompletionEvent) -> anyhow::Result<()>;
    /// Ended runs of a user with `start <= timestamp < end`, oldest first
    async fn find_ended_by_user_in_window(
        &self,
        user_id: &ID,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<CompletionEvent>;
    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use crate::ParloContext;
    use chrono::{TimeZone, Utc};
    use parlo_domain::{CompletionEvent, CompletionState, User, ID};

    fn ended_at(user_id: &ID, day: u32, hour: u32) -> CompletionEvent {
        CompletionEvent::new(
            user_id.clone(),
            Default::default(),
            CompletionState::Ended,
            5,
            Utc.with_ymd_and_hms(2021, 2, day, hour, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn window_filters_by_time_and_state() {
        let ctx = ParloContext::create_inmemory();
        let user = User::new("Ada", "Lovelace");
        ctx.repos.users.insert(&user).await.expect("To insert user");

        // Previous week, inside the window, and after the window
        let last_week = ended_at(&user.id, 20, 12);
        let inside = ended_at(&user.id, 23, 12);
        let later = ended_at(&user.id, 25, 12);
        let mut started = ended_at(&user.id, 23, 14);
        started.state = CompletionState::Started;

        for event in [&last_week, &inside, &later, &started] {
            ctx.repos
                .completion_events
                .insert(event)
                .await
                .expect("To insert completion event");
        }

        let window_start = Utc.with_ymd_and_hms(2021, 2, 22, 0, 0, 0).unwrap();
        let window_end = Utc.with_ymd_and_hms(2021, 2, 24, 12, 0, 0).unwrap();
        let res = ctx
            .repos
            .completion_events
            .find_ended_by_user_in_window(&user.id, window_start, window_end)
            .await;

        assert_eq!(res.len(), 1);
        assert_eq!(res[0].id, inside.id);
    }

    #[tokio::test]
    async fn window_is_scoped_to_the_user() {
        let ctx = ParloContext::create_inmemory();
        let user = User::new("Ada", "Lovelace");
        let other = User::new("Alan", "Turing");
        for u in [&user, &other] {
            ctx.repos.users.insert(u).await.expect("To insert user");
        }

        ctx.repos
            .completion_events
            .insert(&ended_at(&other.id, 23, 12))
            .await
            .expect("To insert completion event");

        let window_start = Utc.with_ymd_and_hms(2021, 2, 22, 0, 0, 0).unwrap();
        let window_end = Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap();
        let res = ctx
            .repos
            .completion_events
            .find_ended_by_user_in_window(&user.id, window_start, window_end)
            .await;
        assert!(res.is_empty());
    }
}
