mod event;
mod shared;
mod user;

use event::{FileEventRepo, IEventRepo, InMemoryEventRepo};
use std::path::Path;
use std::sync::Arc;
use user::{FileUserRepo, IUserRepo, InMemoryUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub events: Arc<dyn IEventRepo>,
    pub users: Arc<dyn IUserRepo>,
}

impl Repos {
    /// Repositories persisting to JSON documents under `data_dir`
    pub fn create_file(data_dir: &Path) -> Self {
        Self {
            events: Arc::new(FileEventRepo::new(data_dir.join("events.json"))),
            users: Arc::new(FileUserRepo::new(data_dir.join("users.json"))),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            events: Arc::new(InMemoryEventRepo::new()),
            users: Arc::new(InMemoryUserRepo::new()),
        }
    }
}
