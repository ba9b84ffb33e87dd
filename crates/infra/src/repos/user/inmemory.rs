use super::IUserRepo;
use parlo_domain::{User, ID};
use std::sync::Mutex;

pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.id == user.id) {
            anyhow::bail!("A user with id: {} already exists", user.id);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        let users = self.users.lock().unwrap();
        users.iter().find(|u| u.id == *user_id).cloned()
    }

    async fn delete(&self, user_id: &ID) -> Option<User> {
        let mut users = self.users.lock().unwrap();
        let pos = users.iter().position(|u| u.id == *user_id)?;
        Some(users.remove(pos))
    }
}
