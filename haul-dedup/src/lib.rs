#![deny(warnings)]
#![deny(rust_2018_idioms)]

use itertools::Itertools;
use vessel_core::Haul;

/// Removes per-vessel overlapping fishing events.
///
/// Within a vessel the events are ordered by period start (ties keep input
/// order) and scanned pairwise against the most recently retained event: a
/// candidate starting inside the retained event's span is dropped, anything
/// else becomes the new retained event. The retained span is never extended,
/// so a chain of three overlapping events can keep its third member even
/// though it overlapped the dropped second one. Vessels with fewer than two
/// events pass through unchanged, and no event is dropped for any reason
/// other than the overlap rule.
pub fn dedup_hauls(hauls: Vec<Haul>) -> Vec<Haul> {
    hauls
        .into_iter()
        .into_group_map_by(|h| h.call_sign.clone())
        .into_values()
        .flat_map(|mut group| {
            group.sort_by_key(|h| h.period.start());
            drop_overlapping(group)
        })
        .sorted_by(|a, b| {
            a.period
                .start()
                .cmp(&b.period.start())
                .then_with(|| a.call_sign.cmp(&b.call_sign))
                .then(a.message_id.cmp(&b.message_id))
        })
        .collect()
}

fn drop_overlapping(sorted: Vec<Haul>) -> Vec<Haul> {
    let mut kept: Vec<Haul> = Vec::with_capacity(sorted.len());

    for candidate in sorted {
        match kept.last() {
            Some(retained)
                if candidate.period.start() < retained.period.end()
                    && candidate.period.start() >= retained.period.start() => {}
            _ => kept.push(candidate),
        }
    }

    kept
}
