use memento_domain::{User, ID};
use serde::{Deserialize, Serialize};

/// The public view of a `User`. The stored credential never leaves the server.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    pub id: ID,
    pub username: String,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}
