use crate::{CallSign, Mmsi, TripId};
use chrono::{DateTime, Utc};
use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Position data emitted by vessel AIS transponders, one row per ping.
/// The call sign is resolved from the MMSI upstream via the vessel register.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AisPosition {
    pub mmsi: Mmsi,
    pub call_sign: CallSign,
    pub msgtime: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub speed_over_ground: Option<f64>,
    pub course_over_ground: Option<f64>,
    pub true_heading: Option<i32>,
    pub navigational_status: NavigationStatus,
}

/// An AIS position after correlation against fishing events and trips.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LabeledPosition {
    pub mmsi: Mmsi,
    pub call_sign: CallSign,
    pub msgtime: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub speed_over_ground: Option<f64>,
    pub course_over_ground: Option<f64>,
    pub true_heading: Option<i32>,
    pub navigational_status: NavigationStatus,
    pub is_fishing: bool,
    pub haul_duration_minutes: Option<i32>,
    pub trip_id: Option<TripId>,
}

impl LabeledPosition {
    pub fn new(
        position: AisPosition,
        is_fishing: bool,
        haul_duration_minutes: Option<i32>,
        trip_id: Option<TripId>,
    ) -> LabeledPosition {
        let AisPosition {
            mmsi,
            call_sign,
            msgtime,
            latitude,
            longitude,
            speed_over_ground,
            course_over_ground,
            true_heading,
            navigational_status,
        } = position;

        LabeledPosition {
            mmsi,
            call_sign,
            msgtime,
            latitude,
            longitude,
            speed_over_ground,
            course_over_ground,
            true_heading,
            navigational_status,
            is_fishing,
            haul_duration_minutes,
            trip_id,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, FromPrimitive, Deserialize_repr, Serialize_repr)]
#[repr(i32)]
pub enum NavigationStatus {
    UnderWayUsingEngine = 0,
    AtAnchor = 1,
    NotUnderCommand = 2,
    RestrictedManoeuverability = 3,
    ConstrainedByDraught = 4,
    Moored = 5,
    Aground = 6,
    EngagedInFishing = 7,
    UnderWaySailing = 8,
    Reserved9 = 9,
    Reserved10 = 10,
    Reserved11 = 11,
    Reserved12 = 12,
    Reserved13 = 13,
    AisSartIsActive = 14,
    NotDefined = 15,
}

#[cfg(feature = "test")]
mod test {
    use super::*;

    impl AisPosition {
        pub fn test_default(mmsi: i32, call_sign: &str, msgtime: DateTime<Utc>) -> AisPosition {
            AisPosition {
                mmsi: Mmsi::new(mmsi),
                call_sign: call_sign.parse().unwrap(),
                msgtime,
                latitude: 71.51,
                longitude: 5.21,
                speed_over_ground: Some(4.2),
                course_over_ground: Some(123.3),
                true_heading: Some(320),
                navigational_status: NavigationStatus::EngagedInFishing,
            }
        }
    }
}
