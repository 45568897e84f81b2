use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use itertools::Itertools;
use snafu::ResultExt;
use tracing::{debug, warn};
use vessel_core::{
    Arrival, ArrivalReport, CallSign, DateRange, Departure, DepartureReport, NewTrip, QuantumCodes,
    QuantumType, Trip, TripId,
};

use crate::error::{
    Result,
    error::{InvalidPeriodSnafu, MissingQuantumDataSnafu},
};

/// The result of assembling one batch of DEP/POR reports.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledTrips {
    pub trips: Vec<Trip>,
    pub skipped_vessels: Vec<CallSign>,
    pub dropped_rows: u32,
}

/// One entry of a vessel's chronologically merged port-call stream.
#[derive(Debug, Clone)]
enum PortCall {
    Departure(Departure),
    Arrival(Arrival),
}

impl PortCall {
    fn timestamp(&self) -> DateTime<Utc> {
        match self {
            PortCall::Departure(d) => d.timestamp,
            PortCall::Arrival(a) => a.timestamp,
        }
    }
}

/// Scan state of the per-vessel trip reconstruction.
enum ScanState {
    NoOpenTrip,
    OpenAwaitingLanding { start: Departure },
    OpenWithLanding { start: Departure, end: Arrival },
}

/// Reconstructs round trips from raw departure and arrival rows.
///
/// Rows are grouped per vessel and aggregated per message, the two event
/// kinds are merged into one chronological stream, and each vessel's stream
/// is scanned with an explicit state machine: a trip opens at the first
/// departure, stays open across further departures and incomplete landings,
/// and is closed by the departure following its last complete landing.
/// The closing departure opens the next trip. A trailing trip that never saw
/// a complete landing is dropped.
///
/// Fails the whole batch when no arrival row carries a quantum type code, as
/// landing completeness cannot be evaluated for any vessel.
pub fn assemble_trips(
    departures: Vec<DepartureReport>,
    arrivals: Vec<ArrivalReport>,
    quantum_codes: &QuantumCodes,
) -> Result<AssembledTrips> {
    if !arrivals.is_empty() && arrivals.iter().all(|a| a.quantum_type_code.is_none()) {
        return MissingQuantumDataSnafu.fail();
    }

    let mut dropped_rows = 0;

    let mut departures_by_vessel: BTreeMap<CallSign, Vec<DepartureReport>> = BTreeMap::new();
    for report in departures {
        match report.call_sign.clone() {
            Some(call_sign) => departures_by_vessel
                .entry(call_sign)
                .or_default()
                .push(report),
            None => dropped_rows += 1,
        }
    }

    let mut arrivals_by_vessel: BTreeMap<CallSign, Vec<ArrivalReport>> = BTreeMap::new();
    for report in arrivals {
        match report.call_sign.clone() {
            Some(call_sign) => arrivals_by_vessel.entry(call_sign).or_default().push(report),
            None => dropped_rows += 1,
        }
    }

    let mut new_trips = Vec::new();
    let mut skipped_vessels = Vec::new();

    for (call_sign, vessel_departures) in departures_by_vessel {
        let vessel_arrivals = arrivals_by_vessel.remove(&call_sign).unwrap_or_default();

        let departures = aggregate_departures(vessel_departures);
        let arrivals = aggregate_arrivals(vessel_arrivals, quantum_codes);

        if !has_both_quantum_categories(&arrivals) {
            warn!("skipping vessel {call_sign}: arrivals lack landed or onboard quantum data");
            skipped_vessels.push(call_sign);
            continue;
        }

        new_trips.extend(scan_vessel(&call_sign, merge_port_calls(departures, arrivals))?);
    }

    Ok(AssembledTrips {
        trips: assign_trip_ids(new_trips),
        skipped_vessels,
        dropped_rows,
    })
}

/// Sequential ids over the globally sorted trips. Sorting by period start
/// (ties by call sign, then period end) makes the numbering reproducible for
/// identical input order.
pub fn assign_trip_ids(mut new_trips: Vec<NewTrip>) -> Vec<Trip> {
    new_trips.sort_by(|a, b| {
        a.period
            .start()
            .cmp(&b.period.start())
            .then_with(|| a.call_sign.cmp(&b.call_sign))
            .then_with(|| a.period.end().cmp(&b.period.end()))
    });

    new_trips
        .into_iter()
        .enumerate()
        .map(|(i, new)| Trip::from_new(TripId(i as i64 + 1), new))
        .collect()
}

fn aggregate_departures(reports: Vec<DepartureReport>) -> Vec<Departure> {
    let mut aggregated: BTreeMap<u64, Departure> = BTreeMap::new();

    // First row of each message wins, as departure messages repeat the
    // timestamp and port on every row.
    for report in reports {
        aggregated.entry(report.message_id).or_insert_with(|| Departure {
            message_id: report.message_id,
            timestamp: report.timestamp,
            port_code: report.port_code.clone(),
        });
    }

    let mut departures: Vec<Departure> = aggregated.into_values().collect();
    departures.sort_by_key(|d| d.timestamp);
    departures
}

fn aggregate_arrivals(reports: Vec<ArrivalReport>, quantum_codes: &QuantumCodes) -> Vec<Arrival> {
    let mut aggregated: BTreeMap<u64, Arrival> = BTreeMap::new();

    for report in reports {
        let arrival = aggregated.entry(report.message_id).or_insert_with(|| Arrival {
            message_id: report.message_id,
            timestamp: report.timestamp,
            port_code: report.port_code.clone(),
            landed_weight: None,
            onboard_weight: None,
        });

        let Some(code) = &report.quantum_type_code else {
            continue;
        };

        let weight = report.round_weight.unwrap_or(0.0);
        match quantum_codes.classify(code) {
            Some(QuantumType::Landed) => *arrival.landed_weight.get_or_insert(0.0) += weight,
            Some(QuantumType::Onboard) => *arrival.onboard_weight.get_or_insert(0.0) += weight,
            None => debug!("ignoring unrecognized quantum type code '{code}'"),
        }
    }

    let mut arrivals: Vec<Arrival> = aggregated.into_values().collect();
    arrivals.sort_by_key(|a| a.timestamp);
    arrivals
}

// Mirrors the source skip rule: a vessel whose arrivals never report both
// quantum categories cannot have landing completeness evaluated.
fn has_both_quantum_categories(arrivals: &[Arrival]) -> bool {
    arrivals.iter().any(|a| a.landed_weight.is_some())
        && arrivals.iter().any(|a| a.onboard_weight.is_some())
}

fn merge_port_calls(departures: Vec<Departure>, arrivals: Vec<Arrival>) -> Vec<PortCall> {
    // Stable: same-timestamp events keep departure-before-arrival order.
    departures
        .into_iter()
        .map(PortCall::Departure)
        .chain(arrivals.into_iter().map(PortCall::Arrival))
        .sorted_by_key(|c| c.timestamp())
        .collect()
}

fn scan_vessel(call_sign: &CallSign, calls: Vec<PortCall>) -> Result<Vec<NewTrip>> {
    let mut trips = Vec::new();
    let mut state = ScanState::NoOpenTrip;

    for call in calls {
        state = match (state, call) {
            (ScanState::NoOpenTrip, PortCall::Departure(d)) => {
                ScanState::OpenAwaitingLanding { start: d }
            }
            // An arrival with no open trip has nothing to close.
            (ScanState::NoOpenTrip, PortCall::Arrival(_)) => ScanState::NoOpenTrip,
            (ScanState::OpenAwaitingLanding { start }, PortCall::Arrival(a)) => {
                if a.is_complete_landing() {
                    ScanState::OpenWithLanding { start, end: a }
                } else {
                    // Incomplete landings never terminate a trip.
                    ScanState::OpenAwaitingLanding { start }
                }
            }
            // Further departures before a completing landing are merged into
            // the open trip without replacing its start.
            (ScanState::OpenAwaitingLanding { start }, PortCall::Departure(_)) => {
                ScanState::OpenAwaitingLanding { start }
            }
            (ScanState::OpenWithLanding { start, end }, PortCall::Departure(d)) => {
                trips.push(new_trip(call_sign, start, end)?);
                ScanState::OpenAwaitingLanding { start: d }
            }
            (ScanState::OpenWithLanding { start, end }, PortCall::Arrival(a)) => {
                if a.is_complete_landing() {
                    // A later complete landing before the next departure
                    // supersedes the earlier one.
                    ScanState::OpenWithLanding { start, end: a }
                } else {
                    ScanState::OpenWithLanding { start, end }
                }
            }
        };
    }

    // A trailing trip without a completing landing is dropped.
    if let ScanState::OpenWithLanding { start, end } = state {
        trips.push(new_trip(call_sign, start, end)?);
    }

    Ok(trips)
}

fn new_trip(call_sign: &CallSign, start: Departure, end: Arrival) -> Result<NewTrip> {
    let period = DateRange::new(start.timestamp, end.timestamp).context(InvalidPeriodSnafu)?;

    Ok(NewTrip {
        call_sign: call_sign.clone(),
        period,
        start_port_code: start.port_code,
        end_port_code: end.port_code,
        landed_weight: end.landed_weight.unwrap_or(0.0),
    })
}
