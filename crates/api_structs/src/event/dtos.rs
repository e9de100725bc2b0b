use chrono::{DateTime, Utc};
use memento_domain::{Event, Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventDTO {
    pub id: ID,
    pub user: String,
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub category: String,
    pub reminder: ReminderDTO,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub set: bool,
    pub reminder_time: Option<DateTime<Utc>>,
    pub notified: bool,
}

impl EventDTO {
    pub fn new(event: Event) -> Self {
        Self {
            id: event.id,
            user: event.user,
            name: event.name,
            description: event.description,
            date: event.date,
            category: event.category,
            reminder: ReminderDTO::new(event.reminder),
        }
    }
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            set: reminder.set,
            reminder_time: reminder.reminder_time,
            notified: reminder.notified,
        }
    }
}
