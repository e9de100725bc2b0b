use chrono::{DateTime, Utc};

/// Parses an RFC 3339 timestamp and normalizes it to a UTC instant.
///
/// Anything else is rejected with an error carrying the offending input,
/// there is no sentinel "invalid date" value.
pub fn parse_utc(datestr: &str) -> anyhow::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(datestr)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| anyhow::Error::msg(String::from(datestr)))
}
