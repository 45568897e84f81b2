use chrono::NaiveDate;
use snafu::ResultExt;
use tracing::{info, warn};
use vessel_core::{
    AisPosition, ArrivalReport, CallSign, DepartureReport, Haul, HaulReport, LabeledPosition, Trip,
};

use crate::{
    Result, Settings,
    error::error::TripAssemblySnafu,
};

/// One UTC day of AIS positions, keyed by the day derived upstream from the
/// source file name.
#[derive(Debug, Clone)]
pub struct PositionBatch {
    pub day: NaiveDate,
    pub positions: Vec<AisPosition>,
}

/// Counts surfaced to the caller for one processed batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub hauls: usize,
    pub trips: usize,
    pub labeled_positions: usize,
    pub dropped_haul_reports: u32,
    pub dropped_port_call_rows: u32,
    pub skipped_vessels: Vec<CallSign>,
}

/// A fully processed batch: deduplicated fishing events, assembled trips,
/// labeled positions, and the counts describing what was filtered on the way.
#[derive(Debug, Clone)]
pub struct ProcessedBatch {
    pub hauls: Vec<Haul>,
    pub trips: Vec<Trip>,
    pub positions: Vec<LabeledPosition>,
    pub report: BatchReport,
}

/// Converts raw fishing-event rows to validated hauls and removes per-vessel
/// overlaps. Returns the kept hauls and the number of dropped malformed rows.
pub fn dedupe_hauls(reports: Vec<HaulReport>) -> (Vec<Haul>, u32) {
    let mut hauls = Vec::with_capacity(reports.len());
    let mut dropped = 0;

    for report in reports {
        match Haul::try_from(report) {
            Ok(haul) => hauls.push(haul),
            Err(e) => {
                dropped += 1;
                warn!("dropping malformed haul report: {e}");
            }
        }
    }

    (haul_dedup::dedup_hauls(hauls), dropped)
}

/// Reconstructs trips from raw DEP/POR rows using the configured quantum
/// category codes.
pub fn assemble_trips(
    departures: Vec<DepartureReport>,
    arrivals: Vec<ArrivalReport>,
    settings: &Settings,
) -> Result<trip_assembler::AssembledTrips> {
    trip_assembler::assemble_trips(departures, arrivals, &settings.quantum_codes)
        .context(TripAssemblySnafu)
}

/// Labels one day of AIS positions. Thin delegation kept here so callers see
/// a single batch-processing surface.
pub fn correlate_day(
    positions: Vec<AisPosition>,
    hauls: &[Haul],
    trips: &[Trip],
    day: NaiveDate,
) -> Vec<LabeledPosition> {
    ais_correlator::correlate_day(positions, hauls, trips, day)
}

/// Runs the full pipeline over one batch of raw reports and day-partitioned
/// positions. Partitions are independent, so a caller may instead invoke the
/// three stages itself and fan per-vessel or per-day slices out to workers.
pub fn process_batch(
    haul_reports: Vec<HaulReport>,
    departures: Vec<DepartureReport>,
    arrivals: Vec<ArrivalReport>,
    position_batches: Vec<PositionBatch>,
    settings: &Settings,
) -> Result<ProcessedBatch> {
    let (hauls, dropped_haul_reports) = dedupe_hauls(haul_reports);
    let assembled = assemble_trips(departures, arrivals, settings)?;

    let mut positions = Vec::new();
    for batch in position_batches {
        positions.extend(correlate_day(
            batch.positions,
            &hauls,
            &assembled.trips,
            batch.day,
        ));
    }

    let report = BatchReport {
        hauls: hauls.len(),
        trips: assembled.trips.len(),
        labeled_positions: positions.len(),
        dropped_haul_reports,
        dropped_port_call_rows: assembled.dropped_rows,
        skipped_vessels: assembled.skipped_vessels,
    };

    info!(
        "processed batch: {} hauls, {} trips, {} labeled positions, {} dropped haul reports, {} dropped port call rows, {} skipped vessels",
        report.hauls,
        report.trips,
        report.labeled_positions,
        report.dropped_haul_reports,
        report.dropped_port_call_rows,
        report.skipped_vessels.len(),
    );

    Ok(ProcessedBatch {
        hauls,
        trips: assembled.trips,
        positions,
        report,
    })
}
