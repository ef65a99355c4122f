//! Calendar month buckets (`YYYY-MM`)

use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

use crate::error::{Error, Result};

/// One calendar month, identified by its first day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    first_day: NaiveDate,
}

impl Month {
    /// Month containing the given instant (UTC)
    pub fn containing(instant: DateTime<Utc>) -> Self {
        let date = instant.date_naive();
        Self {
            first_day: date - Duration::days(i64::from(date.day0())),
        }
    }

    /// The current UTC calendar month
    pub fn current() -> Self {
        Self::containing(Utc::now())
    }

    /// Resolve an optional month string, defaulting to the current month
    pub fn resolve(month: Option<&str>) -> Result<Self> {
        match month {
            Some(s) => s.parse(),
            None => Ok(Self::current()),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// Half-open range `[start, end)` covering the whole month
    ///
    /// `end` is found by stepping 32 days past the 1st (always lands in the
    /// following month) and truncating back to that month's 1st.
    pub fn bounds(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let next_month_day = self.first_day + Duration::days(32);
        let next_first = next_month_day - Duration::days(i64::from(next_month_day.day0()));

        (
            self.first_day.and_time(NaiveTime::MIN).and_utc(),
            next_first.and_time(NaiveTime::MIN).and_utc(),
        )
    }

    /// Whether an instant falls inside this month's bucket
    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        let (start, end) = self.bounds();
        *instant >= start && *instant < end
    }
}

impl FromStr for Month {
    type Err = Error;

    /// Parse `YYYY-MM`: exactly four digits, a dash, two digits, month 01-12
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::MalformedMonth(s.to_string());

        let bytes = s.as_bytes();
        if bytes.len() != 7 || bytes[4] != b'-' {
            return Err(malformed());
        }
        if !bytes[..4].iter().chain(&bytes[5..]).all(u8::is_ascii_digit) {
            return Err(malformed());
        }

        let year: i32 = s[..4].parse().map_err(|_| malformed())?;
        let month: u32 = s[5..].parse().map_err(|_| malformed())?;
        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(malformed)?;

        Ok(Self { first_day })
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}
