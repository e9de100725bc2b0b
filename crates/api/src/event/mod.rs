mod create_event;
pub mod fire_due_reminders;
mod get_events;

use actix_web::web;
use create_event::create_event_controller;
use get_events::get_events_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/events", web::post().to(create_event_controller));
    cfg.route("/events", web::get().to(get_events_controller));
}
