use crate::Event;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The due-time and fired-state embedded in an `Event`.
///
/// `notified` starts out false and flips to true exactly once, when a sweep
/// observes that the reminder has become due. It never flips back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Whether the owner asked to be reminded at all
    pub set: bool,
    /// When to fire. Present iff `set`
    pub reminder_time: Option<DateTime<Utc>>,
    pub notified: bool,
}

impl Reminder {
    pub fn new(reminder_time: Option<DateTime<Utc>>) -> Self {
        Self {
            set: reminder_time.is_some(),
            reminder_time,
            notified: false,
        }
    }

    /// Due means: requested, not yet fired and the due time has passed.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match self.reminder_time {
            Some(reminder_time) => self.set && !self.notified && reminder_time <= now,
            None => false,
        }
    }

    /// pending -> fired. Terminal, there is no way back.
    pub fn fire(&mut self) {
        self.notified = true;
    }
}

/// Flips every reminder in `events` that is due at `now` and returns the
/// events whose reminder fired, in collection order.
///
/// Running the same sweep again with an unchanged `now` fires nothing.
pub fn fire_due_reminders(events: &mut [Event], now: DateTime<Utc>) -> Vec<Event> {
    let mut fired = Vec::new();
    for event in events.iter_mut() {
        if event.reminder.is_due(now) {
            event.reminder.fire();
            fired.push(event.clone());
        }
    }
    fired
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn event_with_reminder(reminder_time: Option<DateTime<Utc>>) -> Event {
        Event::new(
            "alice".into(),
            "Dentist".into(),
            String::new(),
            Utc.ymd(2021, 5, 1).and_hms(12, 0, 0),
            "health".into(),
            reminder_time,
        )
    }

    #[test]
    fn reminder_without_time_is_never_due() {
        let reminder = Reminder::new(None);
        assert!(!reminder.set);
        assert!(!reminder.is_due(Utc.ymd(2100, 1, 1).and_hms(0, 0, 0)));
    }

    #[test]
    fn reminder_is_due_once_time_has_passed() {
        let at = Utc.ymd(2021, 5, 1).and_hms(11, 0, 0);
        let reminder = Reminder::new(Some(at));
        assert!(!reminder.is_due(at - Duration::seconds(1)));
        assert!(reminder.is_due(at));
        assert!(reminder.is_due(at + Duration::hours(3)));
    }

    #[test]
    fn fired_reminder_is_not_due_again() {
        let at = Utc.ymd(2021, 5, 1).and_hms(11, 0, 0);
        let mut reminder = Reminder::new(Some(at));
        assert!(reminder.is_due(at));
        reminder.fire();
        assert!(reminder.notified);
        assert!(!reminder.is_due(at));
    }

    #[test]
    fn sweep_fires_only_due_reminders() {
        let now = Utc.ymd(2021, 5, 1).and_hms(10, 0, 0);
        let mut events = vec![
            event_with_reminder(Some(now - Duration::minutes(5))),
            event_with_reminder(Some(now + Duration::minutes(5))),
            event_with_reminder(None),
        ];

        let fired = fire_due_reminders(&mut events, now);

        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].id, events[0].id);
        assert!(fired[0].reminder.notified);
        assert!(events[0].reminder.notified);
        assert!(!events[1].reminder.notified);
        assert!(!events[2].reminder.notified);
    }

    #[test]
    fn sweep_is_idempotent() {
        let now = Utc.ymd(2021, 5, 1).and_hms(10, 0, 0);
        let mut events = vec![event_with_reminder(Some(now - Duration::minutes(5)))];

        let first = fire_due_reminders(&mut events, now);
        assert_eq!(first.len(), 1);

        let second = fire_due_reminders(&mut events, now);
        assert!(second.is_empty());
        assert!(events[0].reminder.notified);
    }

    #[test]
    fn notified_never_reverts() {
        let now = Utc.ymd(2021, 5, 1).and_hms(10, 0, 0);
        let mut events = vec![event_with_reminder(Some(now - Duration::minutes(5)))];

        fire_due_reminders(&mut events, now);
        for offset in [0, 60, 3600].iter() {
            fire_due_reminders(&mut events, now + Duration::seconds(*offset));
            assert!(events[0].reminder.notified);
        }
    }
}
