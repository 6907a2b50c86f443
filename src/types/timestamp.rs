use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use tracing::debug;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reads a backend timestamp in any of the shapes it has been seen to emit.
///
/// An offset is dropped and the wall-clock time it was written in is kept, so
/// an entry lands on the calendar day its author saw. A bare date is midnight.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.naive_local());
    }

    NAIVE_FORMATS.iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| NaiveDate::parse_from_str(value, DATE_FORMAT).ok().and_then(|date| date.and_hms_opt(0, 0, 0)))
}

pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    Ok(value.and_then(|text| {
        let parsed = parse_timestamp(&text);
        if parsed.is_none() {
            debug!("Dropping unreadable timestamp [{text}]");
        }
        parsed
    }))
}

pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_timestamp(deserializer)?.map(|timestamp| timestamp.date()))
}
