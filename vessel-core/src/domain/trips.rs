use crate::{CallSign, DateRange};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct TripId(pub i64);

impl Display for TripId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// A reconstructed round trip prior to id assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrip {
    pub call_sign: CallSign,
    pub period: DateRange,
    pub start_port_code: Option<String>,
    pub end_port_code: Option<String>,
    pub landed_weight: f64,
}

/// A fully assembled trip. Immutable once emitted, ordered by period start
/// within a vessel.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub trip_id: TripId,
    pub call_sign: CallSign,
    pub period: DateRange,
    pub start_port_code: Option<String>,
    pub end_port_code: Option<String>,
    pub landed_weight: f64,
}

impl Trip {
    pub fn from_new(trip_id: TripId, new: NewTrip) -> Trip {
        let NewTrip {
            call_sign,
            period,
            start_port_code,
            end_port_code,
            landed_weight,
        } = new;

        Trip {
            trip_id,
            call_sign,
            period,
            start_port_code,
            end_port_code,
            landed_weight,
        }
    }
}

#[cfg(feature = "test")]
mod test {
    use super::*;
    use chrono::{DateTime, Utc};

    impl Trip {
        pub fn test_default(
            trip_id: i64,
            call_sign: &str,
            departure: DateTime<Utc>,
            arrival: DateTime<Utc>,
        ) -> Trip {
            Trip {
                trip_id: TripId(trip_id),
                call_sign: call_sign.parse().unwrap(),
                period: DateRange::new(departure, arrival).unwrap(),
                start_port_code: Some("NOTOS".to_string()),
                end_port_code: Some("NOTRD".to_string()),
                landed_weight: 1000.0,
            }
        }
    }
}
