use super::IUserRepo;
use crate::repos::shared::file_store::JsonFileStore;
use memento_domain::User;
use std::path::PathBuf;
use std::sync::Mutex;

/// User directory persisted as a single JSON document.
pub struct FileUserRepo {
    store: JsonFileStore,
    guard: Mutex<()>,
}

impl FileUserRepo {
    pub fn new(path: PathBuf) -> Self {
        Self {
            store: JsonFileStore::new(path),
            guard: Mutex::new(()),
        }
    }

    fn load(&self) -> Vec<User> {
        self.store.load().unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl IUserRepo for FileUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        let _guard = self.guard.lock().unwrap();
        let mut users = self.load();
        users.push(user.clone());
        self.store.save(&users)
    }

    async fn find_by_username(&self, username: &str) -> Option<User> {
        let _guard = self.guard.lock().unwrap();
        self.load().into_iter().find(|u| u.username == username)
    }
}
