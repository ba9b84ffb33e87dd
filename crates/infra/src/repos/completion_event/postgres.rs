use super::ICompletionEventRepo;
use chrono::{DateTime, Utc};
use parlo_domain::{CompletionEvent, CompletionState, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresCompletionEventRepo {
    pool: PgPool,
}

impl PostgresCompletionEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CompletionEventRaw {
    event_uid: Uuid,
    user_uid: Uuid,
    bundle_uid: Uuid,
    state: String,
    step_reached: i64,
    timestamp: DateTime<Utc>,
}

impl From<CompletionEventRaw> for CompletionEvent {
    fn from(e: CompletionEventRaw) -> Self {
        Self {
            id: e.event_uid.into(),
            user_id: e.user_uid.into(),
            bundle_id: e.bundle_uid.into(),
            state: e.state.parse().unwrap_or(CompletionState::Ended),
            step_reached: e.step_reached,
            timestamp: e.timestamp,
        }
    }
}

#[async_trait::async_trait]
impl ICompletionEventRepo for PostgresCompletionEventRepo {
    async fn insert(&self, event: &CompletionEvent) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO completion_events(event_uid, user_uid, bundle_uid, state, step_reached, "timestamp")
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(event.id.inner_ref())
        .bind(event.user_id.inner_ref())
        .bind(event.bundle_id.inner_ref())
        .bind(event.state.as_str())
        .bind(event.step_reached)
        .bind(event.timestamp)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_ended_by_user_in_window(
        &self,
        user_id: &ID,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<CompletionEvent> {
        sqlx::query_as::<_, CompletionEventRaw>(
            r#"
            SELECT * FROM completion_events
            WHERE user_uid = $1 AND state = 'ENDED'
                AND "timestamp" >= $2 AND "timestamp" < $3
            ORDER BY "timestamp"
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|_| Vec::new())
        .into_iter()
        .map(|e| e.into())
        .collect()
    }

    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM completion_events
            WHERE user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
