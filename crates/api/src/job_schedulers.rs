use crate::event::fire_due_reminders::FireDueRemindersUseCase;
use crate::shared::usecase::execute;
use actix_web::rt::time::interval;
use memento_infra::MementoContext;
use std::time::Duration;

/// Spawns the recurring reminder sweep on the actix runtime.
///
/// Each tick runs one `FireDueRemindersUseCase`. A failing sweep is logged
/// by the usecase executor and retried naturally on the next tick.
pub fn start_reminder_sweep_job(ctx: MementoContext) {
    actix_web::rt::spawn(async move {
        let mut interval = interval(Duration::from_secs(ctx.config.reminder_sweep_interval_secs));
        loop {
            interval.tick().await;

            let usecase = FireDueRemindersUseCase;
            let _ = execute(usecase, &ctx).await;
        }
    });
}
