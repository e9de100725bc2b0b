use serde::{de::DeserializeOwned, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// A durable store holding one JSON document per collection.
///
/// Loading is deliberately lenient: a missing or unreadable document is
/// treated as "no data yet" so a fresh deployment starts from an empty
/// collection instead of refusing to boot. A corrupt document is logged
/// before being treated the same way.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load<T: DeserializeOwned>(&self) -> Option<T> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(_) => return None,
        };
        match serde_json::from_str(&data) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(
                    "Store document at {} could not be parsed, treating it as empty: {:?}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    /// Replaces the whole document atomically: readers observe either the
    /// previous document or the new one, never a truncated write.
    pub fn save<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let data = serde_json::to_string_pretty(value)?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, data)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
