use crate::error::MementoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use memento_api_structs::register_user::*;
use memento_domain::User;
use memento_infra::MementoContext;

pub async fn register_user_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<MementoContext>,
) -> Result<HttpResponse, MementoError> {
    let body = body.0;
    let usecase = RegisterUserUseCase {
        username: body.username.unwrap_or_default(),
        password: body.password.unwrap_or_default(),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Created().json(APIResponse::new(res.user)))
        .map_err(MementoError::from)
}

#[derive(Debug)]
pub struct RegisterUserUseCase {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: User,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    MissingCredentials,
    UserAlreadyExists,
    StorageError,
}

impl From<UseCaseError> for MementoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingCredentials => {
                Self::BadClientData("Missing required fields: username, password".into())
            }
            UseCaseError::UserAlreadyExists => {
                Self::BadClientData("A user with that username already exists".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RegisterUserUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "RegisterUser";

    async fn execute(&mut self, ctx: &MementoContext) -> Result<Self::Response, Self::Error> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(UseCaseError::MissingCredentials);
        }

        if ctx
            .repos
            .users
            .find_by_username(&self.username)
            .await
            .is_some()
        {
            return Err(UseCaseError::UserAlreadyExists);
        }

        let user = User::new(self.username.clone(), self.password.clone());
        match ctx.repos.users.insert(&user).await {
            Ok(_) => Ok(UseCaseRes { user }),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
