use crate::helper::*;
use trip_assembler::{Error, assemble_trips};
use vessel_core::{ArrivalReport, QuantumCodes};

#[test]
fn test_skips_vessel_whose_arrivals_lack_an_onboard_category() {
    let mut departures = vec![departure(1, "LK17", 0), departure(4, "JWNN", 0)];
    departures.push(departure(6, "JWNN", 20));

    // LK17 only ever reports landed rows.
    let mut arrivals = vec![ArrivalReport::test_default(2, "LK17", ts(10), "KG", 100.0)];
    arrivals.extend(arrival(5, "JWNN", 10, 10.0, 10.0));

    let assembled = assemble_trips(departures, arrivals, &QuantumCodes::default()).unwrap();

    assert_eq!(1, assembled.trips.len());
    assert_eq!("JWNN", assembled.trips[0].call_sign.as_ref());
    assert_eq!(
        vec!["LK17".parse::<vessel_core::CallSign>().unwrap()],
        assembled.skipped_vessels
    );
}

#[test]
fn test_skips_vessel_with_no_arrivals_at_all() {
    let departures = vec![departure(1, "LK17", 0)];
    let arrivals = arrival(3, "JWNN", 10, 10.0, 10.0);

    let assembled = assemble_trips(departures, arrivals, &QuantumCodes::default()).unwrap();

    assert!(assembled.trips.is_empty());
    assert_eq!(1, assembled.skipped_vessels.len());
}

#[test]
fn test_fails_batch_when_no_arrival_row_has_a_quantum_code() {
    let mut report = ArrivalReport::test_default(2, "LK17", ts(10), "KG", 100.0);
    report.quantum_type_code = None;

    let err = assemble_trips(
        vec![departure(1, "LK17", 0)],
        vec![report],
        &QuantumCodes::default(),
    )
    .unwrap_err();

    assert!(matches!(err, Error::MissingQuantumData { .. }));
}

#[test]
fn test_counts_rows_without_call_sign_as_dropped() {
    let mut anonymous = departure(1, "LK17", 0);
    anonymous.call_sign = None;

    let departures = vec![anonymous, departure(2, "LK17", 1)];
    let arrivals = arrival(3, "LK17", 10, 10.0, 10.0);

    let assembled = assemble_trips(departures, arrivals, &QuantumCodes::default()).unwrap();

    assert_eq!(1, assembled.dropped_rows);
    assert_eq!(1, assembled.trips.len());
}

#[test]
fn test_unrecognized_quantum_codes_do_not_affect_weights() {
    let cs = "LK17";
    let mut arrivals = arrival(2, cs, 10, 10.0, 10.0);
    arrivals.push(ArrivalReport::test_default(2, cs, ts(10), "RE", 999.0));

    let assembled =
        assemble_trips(vec![departure(1, cs, 0)], arrivals, &QuantumCodes::default()).unwrap();

    assert_eq!(1, assembled.trips.len());
    assert_eq!(10.0, assembled.trips[0].landed_weight);
}

#[test]
fn test_respects_configured_quantum_codes() {
    let codes = QuantumCodes {
        landed: "LND".to_string(),
        onboard: "ONB".to_string(),
    };

    let cs = "LK17";
    let arrivals = vec![
        ArrivalReport::test_default(2, cs, ts(10), "LND", 40.0),
        ArrivalReport::test_default(2, cs, ts(10), "ONB", 40.0),
    ];

    let assembled = assemble_trips(vec![departure(1, cs, 0)], arrivals, &codes).unwrap();

    assert_eq!(1, assembled.trips.len());
}
