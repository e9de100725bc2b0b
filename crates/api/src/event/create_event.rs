use crate::error::MementoError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use memento_api_structs::create_event::*;
use memento_domain::{parse_utc, Event, User};
use memento_infra::MementoContext;

pub async fn create_event_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<MementoContext>,
) -> Result<HttpResponse, MementoError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = CreateEventUseCase {
        user,
        name: body.name.unwrap_or_default(),
        description: body.description.unwrap_or_default(),
        date: body.date.unwrap_or_default(),
        category: body.category.unwrap_or_default(),
        reminder_time: body.reminder_time,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Created().json(APIResponse::new(event)))
        .map_err(MementoError::from)
}

#[derive(Debug)]
pub struct CreateEventUseCase {
    pub user: User,
    pub name: String,
    pub description: String,
    pub date: String,
    pub category: String,
    pub reminder_time: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    MissingFields,
    InvalidDate(String),
    StorageError,
}

impl From<UseCaseError> for MementoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingFields => {
                Self::BadClientData("Missing required fields: name, date, category".into())
            }
            UseCaseError::InvalidDate(d) => Self::BadClientData(format!(
                "Invalid datetime: {}. Must be a valid RFC 3339 timestamp",
                d
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEventUseCase {
    type Response = Event;
    type Error = UseCaseError;

    const NAME: &'static str = "CreateEvent";

    async fn execute(&mut self, ctx: &MementoContext) -> Result<Self::Response, Self::Error> {
        if self.name.is_empty() || self.date.is_empty() || self.category.is_empty() {
            return Err(UseCaseError::MissingFields);
        }

        let date =
            parse_utc(&self.date).map_err(|_| UseCaseError::InvalidDate(self.date.clone()))?;
        let reminder_time = match &self.reminder_time {
            Some(at) => Some(parse_utc(at).map_err(|_| UseCaseError::InvalidDate(at.clone()))?),
            None => None,
        };

        let event = Event::new(
            self.user.username.clone(),
            self.name.clone(),
            self.description.clone(),
            date,
            self.category.clone(),
            reminder_time,
        );

        ctx.repos
            .events
            .insert(&event)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(event)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn usecase_factory(user: &User) -> CreateEventUseCase {
        CreateEventUseCase {
            user: user.clone(),
            name: "Dentist".into(),
            description: "Yearly checkup".into(),
            date: "2021-05-01T14:00:00+02:00".into(),
            category: "health".into(),
            reminder_time: Some("2021-05-01T11:30:00Z".into()),
        }
    }

    async fn setup() -> (MementoContext, User) {
        let ctx = MementoContext::create_inmemory();
        let user = User::new("alice".into(), "alice123".into());
        ctx.repos.users.insert(&user).await.unwrap();
        (ctx, user)
    }

    #[actix_web::main]
    #[test]
    async fn creates_event_with_normalized_timestamps() {
        let (ctx, user) = setup().await;

        let mut usecase = usecase_factory(&user);
        let event = usecase.execute(&ctx).await.expect("Event to be created");

        assert_eq!(event.user, "alice");
        assert_eq!(event.date, Utc.ymd(2021, 5, 1).and_hms(12, 0, 0));
        assert!(event.reminder.set);
        assert_eq!(
            event.reminder.reminder_time,
            Some(Utc.ymd(2021, 5, 1).and_hms(11, 30, 0))
        );
        assert!(!event.reminder.notified);

        let stored = ctx.repos.events.find_by_user("alice").await;
        assert_eq!(stored, vec![event]);
    }

    #[actix_web::main]
    #[test]
    async fn creates_event_without_reminder() {
        let (ctx, user) = setup().await;

        let mut usecase = usecase_factory(&user);
        usecase.reminder_time = None;
        let event = usecase.execute(&ctx).await.expect("Event to be created");

        assert!(!event.reminder.set);
        assert_eq!(event.reminder.reminder_time, None);
    }

    #[actix_web::main]
    #[test]
    async fn assigns_unique_ids() {
        let (ctx, user) = setup().await;

        let e1 = usecase_factory(&user).execute(&ctx).await.unwrap();
        let e2 = usecase_factory(&user).execute(&ctx).await.unwrap();
        assert_ne!(e1.id, e2.id);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_missing_required_fields() {
        let (ctx, user) = setup().await;

        let mut usecase = usecase_factory(&user);
        usecase.category = "".into();

        let res = usecase.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::MissingFields);
        assert!(ctx.repos.events.find_all().await.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_invalid_date() {
        let (ctx, user) = setup().await;

        let mut usecase = usecase_factory(&user);
        usecase.date = "next tuesday".into();

        let res = usecase.execute(&ctx).await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::InvalidDate("next tuesday".into())
        );
        assert!(ctx.repos.events.find_all().await.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_invalid_reminder_time() {
        let (ctx, user) = setup().await;

        let mut usecase = usecase_factory(&user);
        usecase.reminder_time = Some("1620000000".into());

        let res = usecase.execute(&ctx).await;
        assert!(res.is_err());
        assert!(ctx.repos.events.find_all().await.is_empty());
    }
}
