//! Attendance derivation: turns one day of gate swipes into one attendance
//! record per employee.
//!
//! For every employee the earliest swipe at an `in` gate and the latest swipe
//! at an `out` gate bound the day. Only employees with both boundaries get a
//! record; everyone else is left untouched until a later run sees the missing
//! swipe.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::{debug, info, instrument};

use crate::db::AttendanceStore;
use crate::error::AppResult;
use crate::model::{
    access_log::DirectedEvent, attendance::DerivedAttendance, gate::GateDirection,
};
use crate::utils::time_utils::day_window;

/// Day a derivation run covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetDay {
    /// The server's current local date
    Today,
    Specific(NaiveDate),
}

impl TargetDay {
    pub fn resolve(self) -> NaiveDate {
        match self {
            TargetDay::Today => Local::now().date_naive(),
            TargetDay::Specific(date) => date,
        }
    }
}

impl From<Option<NaiveDate>> for TargetDay {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(TargetDay::Today, TargetDay::Specific)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DerivationOutcome {
    /// Employees with a complete in/out pair written by this run
    pub records_affected: u64,
    pub date_processed: NaiveDate,
}

/// A single swipe chosen as a day boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    pub time: NaiveDateTime,
    pub gate_id: u32,
}

/// Earliest `in` swipe per employee. Identical timestamps resolve to the lowest gate id.
pub fn earliest_check_ins(events: &[DirectedEvent]) -> BTreeMap<String, Boundary> {
    select_boundaries(events, GateDirection::In, |candidate, current| {
        (candidate.time, candidate.gate_id) < (current.time, current.gate_id)
    })
}

/// Latest `out` swipe per employee. Identical timestamps resolve to the lowest gate id.
pub fn latest_check_outs(events: &[DirectedEvent]) -> BTreeMap<String, Boundary> {
    select_boundaries(events, GateDirection::Out, |candidate, current| {
        candidate.time > current.time
            || (candidate.time == current.time && candidate.gate_id < current.gate_id)
    })
}

fn select_boundaries(
    events: &[DirectedEvent],
    direction: GateDirection,
    replaces: impl Fn(&Boundary, &Boundary) -> bool,
) -> BTreeMap<String, Boundary> {
    let mut selected: BTreeMap<String, Boundary> = BTreeMap::new();

    for event in events.iter().filter(|e| e.direction == direction) {
        let candidate = Boundary {
            time: event.access_time,
            gate_id: event.gate_id,
        };
        selected
            .entry(event.employee_id.clone())
            .and_modify(|current| {
                if replaces(&candidate, current) {
                    *current = candidate;
                }
            })
            .or_insert(candidate);
    }

    selected
}

/// Hours between the two swipes, rounded to two decimals
pub fn stay_hours(check_in: NaiveDateTime, check_out: NaiveDateTime) -> f64 {
    let hours = (check_out - check_in).num_seconds() as f64 / 3600.0;
    (hours * 100.0).round() / 100.0
}

/// Merges the two boundary maps. Returns the complete pairs and the number of
/// employees skipped for lacking one side.
pub fn pair_boundaries(
    report_date: NaiveDate,
    check_ins: &BTreeMap<String, Boundary>,
    check_outs: &BTreeMap<String, Boundary>,
) -> (Vec<DerivedAttendance>, usize) {
    let candidates: BTreeSet<&String> = check_ins.keys().chain(check_outs.keys()).collect();

    let mut complete = Vec::with_capacity(candidates.len());
    let mut skipped = 0;

    for employee_id in candidates {
        match (check_ins.get(employee_id), check_outs.get(employee_id)) {
            (Some(check_in), Some(check_out)) => complete.push(DerivedAttendance {
                employee_id: employee_id.clone(),
                report_date,
                check_in_time: check_in.time,
                check_out_time: check_out.time,
                check_in_gate: check_in.gate_id,
                check_out_gate: check_out.gate_id,
                total_stay_hours: stay_hours(check_in.time, check_out.time),
            }),
            _ => {
                debug!(%employee_id, %report_date, "Incomplete in/out pair, skipping");
                skipped += 1;
            }
        }
    }

    (complete, skipped)
}

#[instrument(skip(store))]
pub async fn derive_attendance(
    store: &dyn AttendanceStore,
    target: TargetDay,
) -> AppResult<DerivationOutcome> {
    let date = target.resolve();
    let (start, end) = day_window(date)?;

    let events = store.directed_events_between(start, end).await?;

    let check_ins = earliest_check_ins(&events);
    let check_outs = latest_check_outs(&events);
    let (records, skipped) = pair_boundaries(date, &check_ins, &check_outs);

    let records_affected = records.len() as u64;
    if !records.is_empty() {
        store.upsert_attendance(records).await?;
    }

    info!(
        %date,
        events = events.len(),
        records_affected,
        skipped,
        "Attendance derivation complete"
    );

    Ok(DerivationOutcome {
        records_affected,
        date_processed: date,
    })
}
