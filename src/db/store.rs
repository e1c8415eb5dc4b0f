use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use crate::error::AppResult;
use crate::model::{
    access_log::DirectedEvent,
    attendance::{AttendanceRecord, DerivedAttendance, RecordOrder},
    employee::Employee,
};

/// Storage operations the derivation engine and attendance reports depend on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttendanceStore: Send + Sync {
    /// All swipes with `start <= access_time < end`, joined with their gate direction
    async fn directed_events_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<DirectedEvent>>;

    /// Insert-or-update every record keyed by (employee_id, report_date) in a
    /// single transaction. Nothing is persisted if any write fails.
    async fn upsert_attendance(&self, records: Vec<DerivedAttendance>) -> AppResult<u64>;

    async fn find_employee(&self, employee_id: &str) -> AppResult<Option<Employee>>;

    async fn employees_in_organization(&self, organization_id: &str) -> AppResult<Vec<Employee>>;

    /// Records with `from <= report_date < to`
    async fn attendance_between(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
        order: RecordOrder,
    ) -> AppResult<Vec<AttendanceRecord>>;
}
