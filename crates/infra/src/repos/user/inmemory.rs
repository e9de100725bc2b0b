use super::IUserRepo;
use crate::repos::shared::inmemory_repo::*;
use memento_domain::User;

pub struct InMemoryUserRepo {
    users: std::sync::Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        insert(user, &self.users);
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Option<User> {
        let mut users = find_by(&self.users, |u| u.username == username);
        if users.is_empty() {
            return None;
        }
        Some(users.remove(0))
    }
}
