//! Request target generation for a window of past days.

use std::fmt::{Display, Formatter};

use time::{Date, Duration, OffsetDateTime};

/// One fully-formed request URL for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTarget(String);

impl RequestTarget {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RequestTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Current local date, falling back to UTC when the local offset is unknown.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// `DD.MM.YYYY`.
pub fn format_day(date: Date) -> String {
    format!(
        "{:02}.{:02}.{:04}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

/// Targets for `days` days ending today. See [`generate_from`].
pub fn generate(days: i64, host: &str) -> Vec<RequestTarget> {
    generate_from(days, host, today())
}

/// Targets for `today` and the `days - 1` days before it.
///
/// `days < 1` is treated as 1. The result is sorted by URL string, so with the
/// `DD.MM.YYYY` date format a window crossing a month boundary comes out ordered
/// by day-of-month (`01.11` before `31.10`), not chronologically.
pub fn generate_from(days: i64, host: &str, today: Date) -> Vec<RequestTarget> {
    let days = days.max(1);
    let mut targets: Vec<RequestTarget> = (0..days)
        .map(|offset| {
            let date = today.saturating_sub(Duration::days(offset));
            let day = format_day(date);
            RequestTarget::new(format!("{host}{}", urlencoding::encode(&day)))
        })
        .collect();
    targets.sort();
    targets
}
