use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use tracing::{debug, instrument};
use utoipa::ToSchema;

use crate::db::AttendanceStore;
use crate::error::{AppError, AppResult};
use crate::model::{
    attendance::{AttendanceRecord, RecordOrder},
    employee::Employee,
};
use crate::utils::time_utils::{MonthRange, parse_year_month};

/// Fixed wall-clock shift bounds lateness and early departure are measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftBoundaries {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Default for ShiftBoundaries {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(8, 30, 0).unwrap_or(NaiveTime::MIN),
            end: NaiveTime::from_hms_opt(17, 30, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum ArrivalStatus {
    #[serde(rename = "On time")]
    OnTime,
    Late,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum DepartureStatus {
    #[serde(rename = "On time")]
    OnTime,
    Early,
}

impl ShiftBoundaries {
    /// Minutes are whole minutes past the shift start, truncated.
    pub fn classify_arrival(&self, check_in: Option<NaiveDateTime>) -> (ArrivalStatus, i64) {
        match check_in {
            Some(t) => {
                let boundary = t.date().and_time(self.start);
                if t > boundary {
                    (ArrivalStatus::Late, (t - boundary).num_minutes())
                } else {
                    (ArrivalStatus::OnTime, 0)
                }
            }
            None => (ArrivalStatus::OnTime, 0),
        }
    }

    pub fn classify_departure(&self, check_out: Option<NaiveDateTime>) -> (DepartureStatus, i64) {
        match check_out {
            Some(t) => {
                let boundary = t.date().and_time(self.end);
                if t < boundary {
                    (DepartureStatus::Early, (boundary - t).num_minutes())
                } else {
                    (DepartureStatus::OnTime, 0)
                }
            }
            None => (DepartureStatus::OnTime, 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AttendanceReportRow {
    #[schema(example = 100)]
    pub record_id: u64,
    #[schema(example = "E001")]
    pub employee_id: String,
    #[schema(example = "2025-04-04", value_type = String, format = "date")]
    pub report_date: NaiveDate,
    #[schema(example = "2025-04-04T09:03:00", value_type = Option<String>, format = "date-time")]
    pub check_in_time: Option<NaiveDateTime>,
    #[schema(example = "2025-04-04T17:51:00", value_type = Option<String>, format = "date-time")]
    pub check_out_time: Option<NaiveDateTime>,
    #[schema(example = 1)]
    pub check_in_gate: Option<u32>,
    #[schema(example = 2)]
    pub check_out_gate: Option<u32>,
    #[schema(example = 8.8)]
    pub total_stay_hours: f64,
    pub late_arrival_status: ArrivalStatus,
    #[schema(example = 33)]
    pub late_arrival_minutes: i64,
    pub early_departure_status: DepartureStatus,
    #[schema(example = 0)]
    pub early_departure_minutes: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EmployeeAttendanceReport {
    #[schema(example = "E001")]
    pub employee_id: String,
    #[schema(example = "John Doe")]
    pub employee_name: String,
    #[schema(example = "ORG001")]
    pub organization_id: String,
    pub records: Vec<AttendanceReportRow>,
}

pub fn annotate(record: AttendanceRecord, shift: &ShiftBoundaries) -> AttendanceReportRow {
    let (late_arrival_status, late_arrival_minutes) = shift.classify_arrival(record.check_in_time);
    let (early_departure_status, early_departure_minutes) =
        shift.classify_departure(record.check_out_time);

    AttendanceReportRow {
        record_id: record.record_id,
        employee_id: record.employee_id,
        report_date: record.report_date,
        check_in_time: record.check_in_time,
        check_out_time: record.check_out_time,
        check_in_gate: record.check_in_gate,
        check_out_gate: record.check_out_gate,
        total_stay_hours: record.total_stay_hours.unwrap_or(0.0),
        late_arrival_status,
        late_arrival_minutes,
        early_departure_status,
        early_departure_minutes,
    }
}

async fn build_report(
    store: &dyn AttendanceStore,
    employee: Employee,
    month: MonthRange,
    order: RecordOrder,
) -> AppResult<EmployeeAttendanceReport> {
    let shift = ShiftBoundaries::default();
    let records = store
        .attendance_between(&employee.employee_id, month.start, month.end, order)
        .await?;

    debug!(
        employee_id = %employee.employee_id,
        records = records.len(),
        "Annotating attendance records"
    );

    Ok(EmployeeAttendanceReport {
        employee_name: employee.full_name(),
        records: records.into_iter().map(|r| annotate(r, &shift)).collect(),
        employee_id: employee.employee_id,
        organization_id: employee.organization_id,
    })
}

#[instrument(skip(store))]
pub async fn employee_attendance(
    store: &dyn AttendanceStore,
    employee_id: &str,
    month: &str,
) -> AppResult<EmployeeAttendanceReport> {
    let range = parse_year_month(month)?;

    let employee = store
        .find_employee(employee_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;

    build_report(store, employee, range, RecordOrder::Stored).await
}

/// An unknown organization yields an empty list, same as one without staff.
#[instrument(skip(store))]
pub async fn organization_attendance(
    store: &dyn AttendanceStore,
    organization_id: &str,
    month: &str,
) -> AppResult<Vec<EmployeeAttendanceReport>> {
    let range = parse_year_month(month)?;

    let employees = store.employees_in_organization(organization_id).await?;

    let mut reports = Vec::with_capacity(employees.len());
    for employee in employees {
        reports.push(build_report(store, employee, range, RecordOrder::NewestFirst).await?);
    }

    Ok(reports)
}
