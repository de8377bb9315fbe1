//! Conversions between `time::OffsetDateTime`, used at the adapter boundary,
//! and Sea-ORM's chrono-based `DateTimeWithTimeZone`, used in the entities.

use chrono::{DateTime, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use time::OffsetDateTime;

use crate::error::{AdapterError, Result};

/// Converts to a UTC `DateTimeWithTimeZone`.
///
/// Values are always stored with a `+00:00` offset so that engines comparing
/// timestamps textually (SQLite) still order them correctly.
pub(crate) fn to_db(time: OffsetDateTime) -> DateTimeWithTimeZone {
    // Every OffsetDateTime fits in chrono's range.
    DateTime::from_timestamp(time.unix_timestamp(), time.nanosecond())
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
        .into()
}

pub(crate) fn to_db_opt(time: Option<OffsetDateTime>) -> Option<DateTimeWithTimeZone> {
    time.map(to_db)
}

pub(crate) fn from_db(datetime: DateTimeWithTimeZone) -> Result<OffsetDateTime> {
    let nanos = i128::from(datetime.timestamp()) * 1_000_000_000
        + i128::from(datetime.timestamp_subsec_nanos());
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .map_err(|e| AdapterError::Backend(format!("stored timestamp out of range: {e}")))
}

pub(crate) fn from_db_opt(
    datetime: Option<DateTimeWithTimeZone>,
) -> Result<Option<OffsetDateTime>> {
    datetime.map(from_db).transpose()
}
