use chrono::{DateTime, TimeZone, Utc};
use vessel_core::{ArrivalReport, DepartureReport};

pub fn ts(hours: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_000_000 + hours * 3600, 0).unwrap()
}

pub fn departure(message_id: u64, call_sign: &str, hours: i64) -> DepartureReport {
    DepartureReport::test_default(message_id, call_sign, ts(hours))
}

/// One POR message expressed as its two quantum rows.
pub fn arrival(
    message_id: u64,
    call_sign: &str,
    hours: i64,
    landed: f64,
    onboard: f64,
) -> Vec<ArrivalReport> {
    vec![
        ArrivalReport::test_default(message_id, call_sign, ts(hours), "KG", landed),
        ArrivalReport::test_default(message_id, call_sign, ts(hours), "OB", onboard),
    ]
}
