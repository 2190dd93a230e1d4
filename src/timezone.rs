//! Resolve the configured timezone name and convert transaction dates into it.

use time::{Date, OffsetDateTime};
use time_tz::{Offset, TimeZone, Tz};

/// Look up `canonical_timezone`, e.g. "America/Sao_Paulo".
///
/// Returns `None` if the name is not a canonical timezone name.
pub fn get_local_timezone(canonical_timezone: &str) -> Option<&'static Tz> {
    time_tz::timezones::get_by_name(canonical_timezone)
}

/// The calendar date of `date_time` in `timezone`, using the UTC offset in
/// force at that instant.
pub(crate) fn local_date(date_time: OffsetDateTime, timezone: &Tz) -> Date {
    let offset = timezone.get_offset_utc(&date_time).to_utc();

    date_time.to_offset(offset).date()
}
