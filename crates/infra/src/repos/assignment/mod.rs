mod inmemory;
mod postgres;

pub use inmemory::InMemoryAssignmentRepo;
use parlo_domain::{Assignment, ID};
pub use postgres::PostgresAssignmentRepo;

#[async_trait::async_trait]
pub trait IAssignmentRepo: Send + Sync {
    /// Fails when the (user, bundle) pair already has an assignment
    async fn insert(&self, assignment: &Assignment) -> anyhow::Result<()>;
    async fn save(&self, assignment: &Assignment) -> anyhow::Result<()>;
    async fn find_by_user(&self, user_id: &ID) -> Vec<Assignment>;
    async fn find_by_user_and_bundle(&self, user_id: &ID, bundle_id: &ID) -> Option<Assignment>;
    async fn delete(&self, user_id: &ID, bundle_id: &ID) -> Option<Assignment>;
    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use crate::ParloContext;
    use parlo_domain::{Assignment, User, WeekdayTag};

    #[tokio::test]
    async fn create_and_delete() {
        let ctx = ParloContext::create_inmemory();
        let user = User::new("Ada", "Lovelace");
        ctx.repos.users.insert(&user).await.expect("To insert user");

        let mut assignment = Assignment::new(user.id.clone(), Default::default(), "Vowel drills");
        assignment.set_schedule(&[WeekdayTag::Mon, WeekdayTag::Thu]);

        // Insert
        assert!(ctx.repos.assignments.insert(&assignment).await.is_ok());

        // Inserting the same pair again is a conflict
        assert!(ctx.repos.assignments.insert(&assignment).await.is_err());

        // Different find methods
        let res = ctx.repos.assignments.find_by_user(&user.id).await;
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].bundle_title, "Vowel drills");
        let res = ctx
            .repos
            .assignments
            .find_by_user_and_bundle(&user.id, &assignment.bundle_id)
            .await;
        assert!(res.is_some());

        // Delete
        let res = ctx
            .repos
            .assignments
            .delete(&user.id, &assignment.bundle_id)
            .await;
        assert!(res.is_some());

        // Find
        assert!(ctx
            .repos
            .assignments
            .find_by_user_and_bundle(&user.id, &assignment.bundle_id)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn update_schedule() {
        let ctx = ParloContext::create_inmemory();
        let user = User::new("Ada", "Lovelace");
        ctx.repos.users.insert(&user).await.expect("To insert user");

        let mut assignment = Assignment::new(user.id.clone(), Default::default(), "Vowel drills");
        assignment.set_schedule(&[WeekdayTag::Mon]);
        assert!(ctx.repos.assignments.insert(&assignment).await.is_ok());

        assignment.set_schedule(&[]);
        assert!(ctx.repos.assignments.save(&assignment).await.is_ok());

        let res = ctx
            .repos
            .assignments
            .find_by_user_and_bundle(&user.id, &assignment.bundle_id)
            .await
            .unwrap();
        assert!(res.schedule.is_empty());
    }

    #[tokio::test]
    async fn delete_by_user() {
        let ctx = ParloContext::create_inmemory();
        let user = User::new("Ada", "Lovelace");
        ctx.repos.users.insert(&user).await.expect("To insert user");

        for title in ["Vowel drills", "Breathing"] {
            let assignment = Assignment::new(user.id.clone(), Default::default(), title);
            ctx.repos
                .assignments
                .insert(&assignment)
                .await
                .expect("To insert assignment");
        }

        assert!(ctx.repos.assignments.delete_by_user(&user.id).await.is_ok());
        assert!(ctx.repos.assignments.find_by_user(&user.id).await.is_empty());
    }
}
