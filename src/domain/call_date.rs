use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use crate::error::RejectReason;

const DATE_FORMAT: &str = "%Y-%m-%d";
/// Timestamps without an offset, as date-time pickers send them
const NAIVE_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// The calendar day a caller asked to be called on
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct CallDate(NaiveDate);

impl CallDate {
    /// Parse a call date and reject days strictly before `today`.
    /// Comparison happens at day granularity, time-of-day never matters.
    pub fn parse_not_before(value: &str, today: NaiveDate) -> Result<Self, RejectReason> {
        let date: Self = value.parse()?;
        if date.0 < today {
            return Err(RejectReason::PastCallDate);
        }
        Ok(date)
    }

    /// Today in the server's local time zone
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }
}

impl FromStr for CallDate {
    type Err = RejectReason;

    /// Accepts a plain `YYYY-MM-DD` date, an RFC 3339 timestamp or a timestamp without offset.
    /// Timestamps keep only their date.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
            return Ok(Self(date));
        }
        if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self(ts.date_naive()));
        }
        NAIVE_TIMESTAMP_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            .map(|ts| Self(ts.date()))
            .ok_or(RejectReason::InvalidCallDate)
    }
}

impl AsRef<NaiveDate> for CallDate {
    fn as_ref(&self) -> &NaiveDate {
        &self.0
    }
}

impl From<CallDate> for NaiveDate {
    fn from(value: CallDate) -> Self {
        value.0
    }
}

impl fmt::Display for CallDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
