use crate::{DateRangeError, date_range_error::OrderingSnafu};
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// A timestamp range, inclusive in both ends.
#[derive(Debug, Clone)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<DateRange, DateRangeError> {
        if start > end {
            OrderingSnafu { start, end }.fail()
        } else {
            Ok(DateRange { start, end })
        }
    }

    /// The range spanning a full UTC day.
    pub fn covering_day(day: NaiveDate) -> DateRange {
        let start = day.and_hms_opt(0, 0, 0).unwrap().and_utc();
        DateRange {
            start,
            end: start + Duration::days(1) - Duration::nanoseconds(1),
        }
    }

    pub fn contains(&self, val: DateTime<Utc>) -> bool {
        val >= self.start && val <= self.end
    }

    pub fn intersects(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

impl PartialEq for DateRange {
    fn eq(&self, other: &Self) -> bool {
        self.start.timestamp() == other.start.timestamp()
            && self.end.timestamp() == other.end.timestamp()
    }
}

impl Eq for DateRange {}
