mod assignment;
mod completion_event;
mod user;

pub use assignment::IAssignmentRepo;
use assignment::{InMemoryAssignmentRepo, PostgresAssignmentRepo};
pub use completion_event::ICompletionEventRepo;
use completion_event::{InMemoryCompletionEventRepo, PostgresCompletionEventRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use user::IUserRepo;
use user::{InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn IUserRepo>,
    pub assignments: Arc<dyn IAssignmentRepo>,
    pub completion_events: Arc<dyn ICompletionEventRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;

        sqlx::migrate!().run(&pool).await?;

        Ok(Self {
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            assignments: Arc::new(PostgresAssignmentRepo::new(pool.clone())),
            completion_events: Arc::new(PostgresCompletionEventRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepo::new()),
            assignments: Arc::new(InMemoryAssignmentRepo::new()),
            completion_events: Arc::new(InMemoryCompletionEventRepo::new()),
        }
    }
}
