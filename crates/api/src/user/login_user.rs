use crate::error::MementoError;
use crate::shared::auth::create_token;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use memento_api_structs::login_user::*;
use memento_infra::MementoContext;

pub async fn login_user_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<MementoContext>,
) -> Result<HttpResponse, MementoError> {
    let body = body.0;
    let usecase = LoginUserUseCase {
        username: body.username.unwrap_or_default(),
        password: body.password.unwrap_or_default(),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse { token: res.token }))
        .map_err(MementoError::from)
}

#[derive(Debug)]
pub struct LoginUserUseCase {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub token: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidCredentials,
    SigningError,
}

impl From<UseCaseError> for MementoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidCredentials => Self::BadClientData("Invalid credentials".into()),
            UseCaseError::SigningError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for LoginUserUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "LoginUser";

    async fn execute(&mut self, ctx: &MementoContext) -> Result<Self::Response, Self::Error> {
        let user = match ctx.repos.users.find_by_username(&self.username).await {
            Some(user) if user.password == self.password => user,
            _ => return Err(UseCaseError::InvalidCredentials),
        };

        let issued_at = ctx.sys.now().timestamp() as usize;
        let token = create_token(&user.username, issued_at, &ctx.config.token_secret)
            .map_err(|_| UseCaseError::SigningError)?;

        Ok(UseCaseRes { token })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use memento_domain::User;

    async fn setup() -> MementoContext {
        let ctx = MementoContext::create_inmemory();
        ctx.repos
            .users
            .insert(&User::new("alice".into(), "alice123".into()))
            .await
            .unwrap();
        ctx
    }

    #[actix_web::main]
    #[test]
    async fn issues_token_for_valid_credentials() {
        let ctx = setup().await;

        let mut usecase = LoginUserUseCase {
            username: "alice".into(),
            password: "alice123".into(),
        };

        let res = usecase.execute(&ctx).await;
        assert!(!res.unwrap().token.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_wrong_password() {
        let ctx = setup().await;

        let mut usecase = LoginUserUseCase {
            username: "alice".into(),
            password: "not-alice123".into(),
        };

        let res = usecase.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::InvalidCredentials);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_username() {
        let ctx = setup().await;

        let mut usecase = LoginUserUseCase {
            username: "bob".into(),
            password: "alice123".into(),
        };

        let res = usecase.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::InvalidCredentials);
    }
}
