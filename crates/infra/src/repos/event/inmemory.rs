use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::{DateTime, Utc};
use memento_domain::{fire_due_reminders, Event};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<Event>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, event: &Event) -> anyhow::Result<()> {
        insert(event, &self.events);
        Ok(())
    }

    async fn find_all(&self) -> Vec<Event> {
        find_by(&self.events, |_| true)
    }

    async fn find_by_user(&self, username: &str) -> Vec<Event> {
        find_by(&self.events, |e| e.user == username)
    }

    async fn fire_due_reminders(&self, now: DateTime<Utc>) -> anyhow::Result<Vec<Event>> {
        let mut events = self.events.lock().unwrap();
        Ok(fire_due_reminders(&mut events, now))
    }
}
