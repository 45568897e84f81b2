use crate::{
    CallSign, DateRange, HaulValidationError,
    haul_validation_error::{InvalidPeriodSnafu, MissingCallSignSnafu, MissingDurationSnafu},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

/// Raw DCA fishing-event row as handed over by the report parser.
/// One row per reported fishing operation, unvalidated.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HaulReport {
    pub message_id: u64,
    pub call_sign: Option<CallSign>,
    pub start_timestamp: DateTime<Utc>,
    pub stop_timestamp: DateTime<Utc>,
    pub duration_minutes: Option<i32>,
    pub gear_code: Option<String>,
    pub catch_weight: Option<f64>,
}

/// A validated fishing-event interval. Immutable after deduplication.
#[derive(Debug, Clone, PartialEq)]
pub struct Haul {
    pub message_id: u64,
    pub call_sign: CallSign,
    pub period: DateRange,
    pub duration_minutes: i32,
    pub gear_code: Option<String>,
    pub catch_weight: f64,
}

impl TryFrom<HaulReport> for Haul {
    type Error = HaulValidationError;

    fn try_from(report: HaulReport) -> Result<Self, Self::Error> {
        let HaulReport {
            message_id,
            call_sign,
            start_timestamp,
            stop_timestamp,
            duration_minutes,
            gear_code,
            catch_weight,
        } = report;

        let call_sign = call_sign.ok_or_else(|| MissingCallSignSnafu { message_id }.build())?;
        let duration_minutes =
            duration_minutes.ok_or_else(|| MissingDurationSnafu { message_id }.build())?;
        let period = DateRange::new(start_timestamp, stop_timestamp)
            .context(InvalidPeriodSnafu { message_id })?;

        Ok(Haul {
            message_id,
            call_sign,
            period,
            duration_minutes,
            gear_code,
            catch_weight: catch_weight.unwrap_or(0.0),
        })
    }
}

#[cfg(feature = "test")]
mod test {
    use super::*;
    use chrono::Duration;

    impl HaulReport {
        pub fn test_default(
            message_id: u64,
            call_sign: &str,
            start: DateTime<Utc>,
        ) -> HaulReport {
            HaulReport {
                message_id,
                call_sign: Some(call_sign.parse().unwrap()),
                start_timestamp: start,
                stop_timestamp: start + Duration::hours(1),
                duration_minutes: Some(60),
                gear_code: Some("OTB".to_string()),
                catch_weight: Some(1250.0),
            }
        }
    }

    impl Haul {
        pub fn test_default(message_id: u64, call_sign: &str, start: DateTime<Utc>) -> Haul {
            Haul::try_from(HaulReport::test_default(message_id, call_sign, start)).unwrap()
        }

        pub fn test_with_period(
            message_id: u64,
            call_sign: &str,
            start: DateTime<Utc>,
            stop: DateTime<Utc>,
        ) -> Haul {
            let mut report = HaulReport::test_default(message_id, call_sign, start);
            report.stop_timestamp = stop;
            report.duration_minutes = Some((stop - start).num_minutes() as i32);
            Haul::try_from(report).unwrap()
        }
    }
}
