use chrono::{DateTime, Utc};
use snafu::{Location, Snafu};

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum DateRangeError {
    #[snafu(display("Range start '{start}' was after end '{end}'"))]
    Ordering {
        #[snafu(implicit)]
        location: Location,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum ParseStringError {
    #[snafu(display("String was unexpectedly empty"))]
    Empty {
        #[snafu(implicit)]
        location: Location,
    },
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum HaulValidationError {
    #[snafu(display("Haul report '{message_id}' had no call sign"))]
    MissingCallSign {
        #[snafu(implicit)]
        location: Location,
        message_id: u64,
    },
    #[snafu(display("Haul report '{message_id}' had no reported duration"))]
    MissingDuration {
        #[snafu(implicit)]
        location: Location,
        message_id: u64,
    },
    #[snafu(display("Haul report '{message_id}' had an invalid period"))]
    InvalidPeriod {
        #[snafu(implicit)]
        location: Location,
        message_id: u64,
        source: DateRangeError,
    },
}
