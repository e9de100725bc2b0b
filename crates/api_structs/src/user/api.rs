use crate::dtos::UserDTO;
use memento_domain::User;
use serde::{Deserialize, Serialize};

pub mod register_user {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub username: Option<String>,
        pub password: Option<String>,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub user: UserDTO,
    }

    impl APIResponse {
        pub fn new(user: User) -> Self {
            Self {
                user: UserDTO::new(user),
            }
        }
    }
}

pub mod login_user {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub username: Option<String>,
        pub password: Option<String>,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub token: String,
    }
}
