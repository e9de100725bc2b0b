mod file;
mod inmemory;

use chrono::{DateTime, Utc};
pub use file::FileEventRepo;
pub use inmemory::InMemoryEventRepo;
use memento_domain::Event;

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    /// Appends the event to the stored collection
    async fn insert(&self, event: &Event) -> anyhow::Result<()>;
    /// The whole stored collection, in insertion order
    async fn find_all(&self) -> Vec<Event>;
    /// Events owned by `username`, in insertion order
    async fn find_by_user(&self, username: &str) -> Vec<Event>;
    /// Atomically flips every reminder due at `now` and returns the events
    /// whose reminder fired. The store write is skipped when nothing fired.
    async fn fire_due_reminders(&self, now: DateTime<Utc>) -> anyhow::Result<Vec<Event>>;
}
