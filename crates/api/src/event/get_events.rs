use crate::error::MementoError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use memento_api_structs::get_events::*;
use memento_domain::{sort_events, Event, EventSortKey, User};
use memento_infra::MementoContext;

pub async fn get_events_controller(
    http_req: HttpRequest,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<MementoContext>,
) -> Result<HttpResponse, MementoError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetEventsUseCase {
        user,
        sort_by: EventSortKey::parse(query_params.sort_by.as_deref()),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.events)))
        .map_err(MementoError::from)
}

#[derive(Debug)]
pub struct GetEventsUseCase {
    pub user: User,
    pub sort_by: EventSortKey,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub events: Vec<Event>,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for MementoError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventsUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "GetEvents";

    async fn execute(&mut self, ctx: &MementoContext) -> Result<Self::Response, Self::Error> {
        let mut events = ctx.repos.events.find_by_user(&self.user.username).await;
        sort_events(&mut events, self.sort_by);
        Ok(UseCaseRes { events })
    }
}
