mod file;
mod inmemory;

pub use file::FileUserRepo;
pub use inmemory::InMemoryUserRepo;
use memento_domain::User;

/// The user directory. Uniqueness of usernames is the caller's contract:
/// check `find_by_username` before `insert`.
#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn find_by_username(&self, username: &str) -> Option<User>;
}
