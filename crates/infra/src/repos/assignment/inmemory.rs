use super::IAssignmentRepo;
use parlo_domain::{Assignment, ID};
use std::sync::Mutex;

pub struct InMemoryAssignmentRepo {
    assignments: Mutex<Vec<Assignment>>,
}

impl InMemoryAssignmentRepo {
    pub fn new() -> Self {
        Self {
            assignments: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IAssignmentRepo for InMemoryAssignmentRepo {
    async fn insert(&self, assignment: &Assignment) -> anyhow::Result<()> {
        let mut assignments = self.assignments.lock().unwrap();
        if assignments
            .iter()
            .any(|a| a.user_id == assignment.user_id && a.bundle_id == assignment.bundle_id)
        {
            anyhow::bail!(
                "Bundle: {} is already assigned to user: {}",
                assignment.bundle_id,
                assignment.user_id
            );
        }
        assignments.push(assignment.clone());
        Ok(())
    }

    async fn save(&self, assignment: &Assignment) -> anyhow::Result<()> {
        let mut assignments = self.assignments.lock().unwrap();
        for existing in assignments.iter_mut() {
            if existing.user_id == assignment.user_id && existing.bundle_id == assignment.bundle_id
            {
                *existing = assignment.clone();
            }
        }
        Ok(())
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Assignment> {
        let assignments = self.assignments.lock().unwrap();
        assignments
            .iter()
            .filter(|a| a.user_id == *user_id)
            .cloned()
            .collect()
    }

    async fn find_by_user_and_bundle(&self, user_id: &ID, bundle_id: &ID) -> Option<Assignment> {
        let assignments = self.assignments.lock().unwrap();
        assignments
            .iter()
            .find(|a| a.user_id == *user_id && a.bundle_id == *bundle_id)
            .cloned()
    }

    async fn delete(&self, user_id: &ID, bundle_id: &ID) -> Option<Assignment> {
        let mut assignments = self.assignments.lock().unwrap();
        let pos = assignments
            .iter()
            .position(|a| a.user_id == *user_id && a.bundle_id == *bundle_id)?;
        Some(assignments.remove(pos))
    }

    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<()> {
        let mut assignments = self.assignments.lock().unwrap();
        assignments.retain(|a| a.user_id != *user_id);
        Ok(())
    }
}
