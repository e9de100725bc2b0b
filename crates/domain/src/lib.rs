mod date;
mod event;
mod reminder;
mod shared;
mod user;

pub use date::parse_utc;
pub use event::{sort_events, Event, EventSortKey};
pub use reminder::{fire_due_reminders, Reminder};
pub use shared::entity::ID;
pub use user::User;
