#![deny(warnings)]
#![deny(rust_2018_idioms)]

use std::collections::HashMap;

use chrono::NaiveDate;
use itertools::Itertools;
use vessel_core::{AisPosition, CallSign, DateRange, Haul, LabeledPosition, Trip, TripId};

/// Labels one UTC day of AIS positions against deduplicated fishing events
/// and assembled trips.
///
/// Candidates are restricted to hauls and trips whose period intersects the
/// day before the per-vessel join, bounding the cost to the day's slice.
/// A position matches a candidate of its own vessel when its timestamp lies
/// inside the candidate's period, both ends inclusive. Labeling the full
/// position set day by day yields the same result as a single unrestricted
/// join.
pub fn correlate_day(
    positions: Vec<AisPosition>,
    hauls: &[Haul],
    trips: &[Trip],
    day: NaiveDate,
) -> Vec<LabeledPosition> {
    let window = DateRange::covering_day(day);

    let day_hauls: HashMap<&CallSign, Vec<&Haul>> = hauls
        .iter()
        .filter(|h| h.period.intersects(&window))
        .into_group_map_by(|h| &h.call_sign);
    let day_trips: HashMap<&CallSign, Vec<&Trip>> = trips
        .iter()
        .filter(|t| t.period.intersects(&window))
        .into_group_map_by(|t| &t.call_sign);

    positions
        .into_iter()
        .map(|position| {
            let matched_hauls: Vec<&Haul> = day_hauls
                .get(&position.call_sign)
                .map(|candidates| {
                    candidates
                        .iter()
                        .filter(|h| h.period.contains(position.msgtime))
                        .copied()
                        .collect()
                })
                .unwrap_or_default();
            let matched_trips: Vec<&Trip> = day_trips
                .get(&position.call_sign)
                .map(|candidates| {
                    candidates
                        .iter()
                        .filter(|t| t.period.contains(position.msgtime))
                        .copied()
                        .collect()
                })
                .unwrap_or_default();

            let is_fishing = !matched_hauls.is_empty();
            let duration = max_duration(&matched_hauls);
            let trip_id = max_trip_id(&matched_trips);

            LabeledPosition::new(position, is_fishing, duration, trip_id)
        })
        .collect()
}

/// Tie-break policy: when several fishing events contain a position, the
/// longest reported duration wins.
pub fn max_duration(matched: &[&Haul]) -> Option<i32> {
    matched.iter().map(|h| h.duration_minutes).max()
}

/// Tie-break policy: when several trips contain a position, the highest trip
/// id wins.
pub fn max_trip_id(matched: &[&Trip]) -> Option<TripId> {
    matched.iter().map(|t| t.trip_id).max()
}
