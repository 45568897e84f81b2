use crate::helper::*;
use trip_assembler::assemble_trips;
use vessel_core::{DateRange, QuantumCodes, Trip, TripId};

#[test]
fn test_merges_legs_until_complete_landing() {
    let cs = "LK17";
    let departures = vec![
        departure(1, cs, 0),
        departure(3, cs, 2),
        departure(5, cs, 4),
        departure(7, cs, 6),
    ];
    let mut arrivals = arrival(2, cs, 1, 10.0, 10.0);
    arrivals.extend(arrival(4, cs, 3, 5.0, 8.0));
    arrivals.extend(arrival(6, cs, 5, 8.0, 8.0));

    let assembled = assemble_trips(departures, arrivals, &QuantumCodes::default()).unwrap();

    let expected = vec![
        Trip {
            trip_id: TripId(1),
            call_sign: cs.parse().unwrap(),
            period: DateRange::new(ts(0), ts(1)).unwrap(),
            start_port_code: Some("NOTOS".to_string()),
            end_port_code: Some("NOTRD".to_string()),
            landed_weight: 10.0,
        },
        // The incomplete landing and the departure after it do not close
        // anything, so the second and third legs merge into one trip.
        Trip {
            trip_id: TripId(2),
            call_sign: cs.parse().unwrap(),
            period: DateRange::new(ts(2), ts(5)).unwrap(),
            start_port_code: Some("NOTOS".to_string()),
            end_port_code: Some("NOTRD".to_string()),
            landed_weight: 8.0,
        },
    ];
    assert_eq!(expected, assembled.trips);
    assert!(assembled.skipped_vessels.is_empty());
}

#[test]
fn test_emits_final_trip_with_complete_landing_at_end_of_stream() {
    let cs = "LK17";
    let assembled = assemble_trips(
        vec![departure(1, cs, 0)],
        arrival(2, cs, 12, 500.0, 500.0),
        &QuantumCodes::default(),
    )
    .unwrap();

    assert_eq!(1, assembled.trips.len());
    assert_eq!(
        DateRange::new(ts(0), ts(12)).unwrap(),
        assembled.trips[0].period
    );
}

#[test]
fn test_drops_trailing_trip_without_complete_landing() {
    let cs = "LK17";
    let assembled = assemble_trips(
        vec![departure(1, cs, 0)],
        arrival(2, cs, 12, 300.0, 450.0),
        &QuantumCodes::default(),
    )
    .unwrap();

    assert!(assembled.trips.is_empty());
    assert!(assembled.skipped_vessels.is_empty());
}

#[test]
fn test_later_complete_landing_supersedes_earlier() {
    let cs = "LK17";
    let mut arrivals = arrival(2, cs, 5, 100.0, 100.0);
    arrivals.extend(arrival(3, cs, 8, 250.0, 250.0));

    let assembled =
        assemble_trips(vec![departure(1, cs, 0)], arrivals, &QuantumCodes::default()).unwrap();

    assert_eq!(1, assembled.trips.len());
    assert_eq!(
        DateRange::new(ts(0), ts(8)).unwrap(),
        assembled.trips[0].period
    );
    assert_eq!(250.0, assembled.trips[0].landed_weight);
}

#[test]
fn test_arrival_before_any_departure_is_ignored() {
    let cs = "LK17";
    let mut arrivals = arrival(1, cs, 0, 50.0, 50.0);
    arrivals.extend(arrival(3, cs, 10, 75.0, 75.0));

    let assembled =
        assemble_trips(vec![departure(2, cs, 5)], arrivals, &QuantumCodes::default()).unwrap();

    assert_eq!(1, assembled.trips.len());
    assert_eq!(
        DateRange::new(ts(5), ts(10)).unwrap(),
        assembled.trips[0].period
    );
}

#[test]
fn test_trip_ids_are_sequential_by_departure_time_across_vessels() {
    let mut departures = vec![departure(1, "LK17", 0), departure(3, "JWNN", 2)];
    departures.push(departure(5, "LK17", 24));
    let mut arrivals = arrival(2, "LK17", 10, 10.0, 10.0);
    arrivals.extend(arrival(4, "JWNN", 12, 20.0, 20.0));
    arrivals.extend(arrival(6, "LK17", 30, 30.0, 30.0));

    let assembled = assemble_trips(departures, arrivals, &QuantumCodes::default()).unwrap();

    let order: Vec<(i64, String)> = assembled
        .trips
        .iter()
        .map(|t| (t.trip_id.0, t.call_sign.to_string()))
        .collect();
    assert_eq!(
        vec![
            (1, "LK17".to_string()),
            (2, "JWNN".to_string()),
            (3, "LK17".to_string()),
        ],
        order
    );
}

#[test]
fn test_sums_arrival_rows_per_quantum_category() {
    let cs = "LK17";
    // Two landed rows of the same message must sum up to match the onboard
    // quantity for the landing to count as complete.
    let arrivals = vec![
        vessel_core::ArrivalReport::test_default(2, cs, ts(6), "KG", 40.0),
        vessel_core::ArrivalReport::test_default(2, cs, ts(6), "KG", 60.0),
        vessel_core::ArrivalReport::test_default(2, cs, ts(6), "OB", 100.0),
    ];

    let assembled =
        assemble_trips(vec![departure(1, cs, 0)], arrivals, &QuantumCodes::default()).unwrap();

    assert_eq!(1, assembled.trips.len());
    assert_eq!(100.0, assembled.trips[0].landed_weight);
}
