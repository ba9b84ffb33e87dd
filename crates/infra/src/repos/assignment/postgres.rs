use super::IAssignmentRepo;
use parlo_domain::{Assignment, WeekdayTag, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresAssignmentRepo {
    pool: PgPool,
}

impl PostgresAssignmentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AssignmentRaw {
    user_uid: Uuid,
    bundle_uid: Uuid,
    bundle_title: String,
    schedule: Vec<String>,
}

fn to_schedule_rows(schedule: &[WeekdayTag]) -> Vec<String> {
    schedule.iter().map(|d| d.to_string()).collect()
}

impl From<AssignmentRaw> for Assignment {
    fn from(e: AssignmentRaw) -> Self {
        // Tags that fail to parse are dropped rather than failing the read
        let schedule = e.schedule.iter().filter_map(|d| d.parse().ok()).collect();
        Self {
            user_id: e.user_uid.into(),
            bundle_id: e.bundle_uid.into(),
            bundle_title: e.bundle_title,
            schedule,
        }
    }
}

#[async_trait::async_trait]
impl IAssignmentRepo for PostgresAssignmentRepo {
    async fn insert(&self, assignment: &Assignment) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO assignments(user_uid, bundle_uid, bundle_title, schedule)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(assignment.user_id.inner_ref())
        .bind(assignment.bundle_id.inner_ref())
        .bind(&assignment.bundle_title)
        .bind(to_schedule_rows(&assignment.schedule))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, assignment: &Assignment) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE assignments
            SET bundle_title = $3,
            schedule = $4
            WHERE user_uid = $1 AND bundle_uid = $2
            "#,
        )
        .bind(assignment.user_id.inner_ref())
        .bind(assignment.bundle_id.inner_ref())
        .bind(&assignment.bundle_title)
        .bind(to_schedule_rows(&assignment.schedule))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Assignment> {
        sqlx::query_as::<_, AssignmentRaw>(
            r#"
            SELECT * FROM assignments
            WHERE user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|_| Vec::new())
        .into_iter()
        .map(|a| a.into())
        .collect()
    }

    async fn find_by_user_and_bundle(&self, user_id: &ID, bundle_id: &ID) -> Option<Assignment> {
        sqlx::query_as::<_, AssignmentRaw>(
            r#"
            SELECT * FROM assignments
            WHERE user_uid = $1 AND bundle_uid = $2
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(bundle_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or(None)
        .map(|a| a.into())
    }

    async fn delete(&self, user_id: &ID, bundle_id: &ID) -> Option<Assignment> {
        sqlx::query_as::<_, AssignmentRaw>(
            r#"
            DELETE FROM assignments
            WHERE user_uid = $1 AND bundle_uid = $2
            RETURNING *
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(bundle_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or(None)
        .map(|a| a.into())
    }

    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM assignments
            WHERE user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
