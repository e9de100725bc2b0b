use super::IEventRepo;
use crate::repos::shared::file_store::JsonFileStore;
use chrono::{DateTime, Utc};
use memento_domain::{fire_due_reminders, Event};
use std::path::PathBuf;
use std::sync::Mutex;

/// Event collection persisted as a single JSON document.
///
/// The mutex is held across every whole load-modify-save cycle, so a
/// request-triggered `insert` can never interleave with the sweep's
/// read-modify-write and lose an update.
pub struct FileEventRepo {
    store: JsonFileStore,
    guard: Mutex<()>,
}

impl FileEventRepo {
    pub fn new(path: PathBuf) -> Self {
        Self {
            store: JsonFileStore::new(path),
            guard: Mutex::new(()),
        }
    }

    fn load(&self) -> Vec<Event> {
        self.store.load().unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl IEventRepo for FileEventRepo {
    async fn insert(&self, event: &Event) -> anyhow::Result<()> {
        let _guard = self.guard.lock().unwrap();
        let mut events = self.load();
        events.push(event.clone());
        self.store.save(&events)
    }

    async fn find_all(&self) -> Vec<Event> {
        let _guard = self.guard.lock().unwrap();
        self.load()
    }

    async fn find_by_user(&self, username: &str) -> Vec<Event> {
        let _guard = self.guard.lock().unwrap();
        self.load()
            .into_iter()
            .filter(|e| e.user == username)
            .collect()
    }

    async fn fire_due_reminders(&self, now: DateTime<Utc>) -> anyhow::Result<Vec<Event>> {
        let _guard = self.guard.lock().unwrap();
        let mut events = self.load();
        let fired = fire_due_reminders(&mut events, now);
        if !fired.is_empty() {
            self.store.save(&events)?;
        }
        Ok(fired)
    }
}
