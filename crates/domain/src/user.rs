use crate::shared::entity::ID;
use serde::{Deserialize, Serialize};

/// A registered account in the user directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: ID,
    pub username: String,
    /// Stored as given. Credential hardening is out of scope for this service.
    pub password: String,
}

impl User {
    pub fn new(username: String, password: String) -> Self {
        Self {
            id: Default::default(),
            username,
            password,
        }
    }
}
