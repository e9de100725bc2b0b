use crate::shared::entity::ID;
use crate::Reminder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-owned, dated record with an optional reminder.
///
/// Immutable after creation, except for the reminder's `notified` flag which
/// the sweep flips exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: ID,
    /// Username of the owner. Events are only ever visible to their owner.
    pub user: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>,
    pub category: String,
    pub reminder: Reminder,
}

impl Event {
    pub fn new(
        user: String,
        name: String,
        description: String,
        date: DateTime<Utc>,
        category: String,
        reminder_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: Default::default(),
            user,
            name,
            description,
            date,
            category,
            reminder: Reminder::new(reminder_time),
        }
    }
}

/// Which key `GetEvents` orders by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventSortKey {
    Date,
    Category,
    Reminder,
}

impl EventSortKey {
    /// Missing or unrecognized keys fall back to `Date`.
    pub fn parse(key: Option<&str>) -> Self {
        match key {
            Some("category") => Self::Category,
            Some("reminder") => Self::Reminder,
            _ => Self::Date,
        }
    }
}

/// Sorts events by the given key. The sort is stable, so events comparing
/// equal keep their original (insertion) order.
pub fn sort_events(events: &mut [Event], key: EventSortKey) {
    match key {
        EventSortKey::Date => events.sort_by_key(|e| e.date),
        EventSortKey::Category => events.sort_by(|a, b| a.category.cmp(&b.category)),
        EventSortKey::Reminder => events.sort_by_key(|e| e.reminder.set),
    }
}
