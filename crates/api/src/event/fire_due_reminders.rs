use crate::error::MementoError;
use crate::shared::usecase::{Subscriber, UseCase};
use memento_domain::Event;
use memento_infra::MementoContext;
use tracing::info;

/// One sweep of the reminder scan: flips every reminder that has become due
/// and reports the events that fired.
#[derive(Debug)]
pub struct FireDueRemindersUseCase;

#[derive(Debug)]
pub struct UseCaseRes {
    pub fired: Vec<Event>,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for MementoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for FireDueRemindersUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "FireDueReminders";

    async fn execute(&mut self, ctx: &MementoContext) -> Result<Self::Response, Self::Error> {
        // One cutoff per sweep, not one per event
        let now = ctx.sys.now();

        let fired = ctx
            .repos
            .events
            .fire_due_reminders(now)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseRes { fired })
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(NotifyFiredReminders)]
    }
}

/// Announces fired reminders. Delivery here is a structured log line,
/// anything tailing the logs can pick it up.
pub struct NotifyFiredReminders;

#[async_trait::async_trait(?Send)]
impl Subscriber<FireDueRemindersUseCase> for NotifyFiredReminders {
    async fn notify(&self, res: &UseCaseRes, _ctx: &MementoContext) {
        for event in &res.fired {
            info!(
                "Reminder: event {} (user: {}) is coming up at {}",
                event.name, event.user, event.date
            );
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::create_event::CreateEventUseCase;
    use crate::shared::usecase::execute;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use memento_domain::User;
    use memento_infra::ISys;
    use std::sync::Arc;

    pub struct StaticTimeSys(DateTime<Utc>);
    impl ISys for StaticTimeSys {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn creation_time() -> DateTime<Utc> {
        Utc.ymd(2021, 5, 1).and_hms(10, 0, 0)
    }

    async fn setup() -> MementoContext {
        let mut ctx = MementoContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys(creation_time()));

        let user = User::new("alice".into(), "alice123".into());
        ctx.repos.users.insert(&user).await.unwrap();

        // Event in one hour with a reminder five minutes from now
        let usecase = CreateEventUseCase {
            user: user.clone(),
            name: "Dentist".into(),
            description: String::new(),
            date: (creation_time() + Duration::hours(1)).to_rfc3339(),
            category: "health".into(),
            reminder_time: Some((creation_time() + Duration::minutes(5)).to_rfc3339()),
        };
        execute(usecase, &ctx).await.unwrap();

        // Event without any reminder
        let usecase = CreateEventUseCase {
            user,
            name: "Groceries".into(),
            description: String::new(),
            date: (creation_time() + Duration::hours(2)).to_rfc3339(),
            category: "errands".into(),
            reminder_time: None,
        };
        execute(usecase, &ctx).await.unwrap();

        ctx
    }

    #[actix_web::main]
    #[test]
    async fn does_not_fire_before_due_time() {
        let ctx = setup().await;

        let res = execute(FireDueRemindersUseCase, &ctx).await.unwrap();
        assert!(res.fired.is_empty());

        let events = ctx.repos.events.find_by_user("alice").await;
        assert!(events.iter().all(|e| !e.reminder.notified));
    }

    #[actix_web::main]
    #[test]
    async fn fires_once_due_time_has_passed() {
        let mut ctx = setup().await;
        ctx.sys = Arc::new(StaticTimeSys(creation_time() + Duration::minutes(6)));

        let res = execute(FireDueRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(res.fired.len(), 1);
        assert_eq!(res.fired[0].name, "Dentist");

        let events = ctx.repos.events.find_by_user("alice").await;
        let dentist = events.iter().find(|e| e.name == "Dentist").unwrap();
        assert!(dentist.reminder.set);
        assert!(dentist.reminder.notified);
    }

    #[actix_web::main]
    #[test]
    async fn second_sweep_changes_nothing() {
        let mut ctx = setup().await;
        ctx.sys = Arc::new(StaticTimeSys(creation_time() + Duration::minutes(6)));

        let first = execute(FireDueRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(first.fired.len(), 1);

        let second = execute(FireDueRemindersUseCase, &ctx).await.unwrap();
        assert!(second.fired.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn never_fires_events_without_reminder() {
        let mut ctx = setup().await;
        ctx.sys = Arc::new(StaticTimeSys(creation_time() + Duration::days(365)));

        execute(FireDueRemindersUseCase, &ctx).await.unwrap();

        let events = ctx.repos.events.find_by_user("alice").await;
        let groceries = events.iter().find(|e| e.name == "Groceries").unwrap();
        assert!(!groceries.reminder.set);
        assert!(!groceries.reminder.notified);
    }
}
