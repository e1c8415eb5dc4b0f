use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Stored attendance row, one per (employee_id, report_date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AttendanceRecord {
    pub record_id: u64,
    pub employee_id: String,
    pub report_date: NaiveDate,
    pub check_in_time: Option<NaiveDateTime>,
    pub check_out_time: Option<NaiveDateTime>,
    pub check_in_gate: Option<u32>,
    pub check_out_gate: Option<u32>,
    pub total_stay_hours: Option<f64>,
    pub updated_by: String,
}

/// A complete in/out pair produced by a derivation run, ready to upsert.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedAttendance {
    pub employee_id: String,
    pub report_date: NaiveDate,
    pub check_in_time: NaiveDateTime,
    pub check_out_time: NaiveDateTime,
    pub check_in_gate: u32,
    pub check_out_gate: u32,
    pub total_stay_hours: f64,
}

/// Ordering of records returned for a month query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOrder {
    /// Whatever order the store yields
    Stored,
    NewestFirst,
}
