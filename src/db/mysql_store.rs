use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::MySqlPool;
use tracing::{debug, error, warn};

use crate::db::store::AttendanceStore;
use crate::error::AppResult;
use crate::model::{
    access_log::{DirectedEvent, DirectedEventRow},
    attendance::{AttendanceRecord, DerivedAttendance, RecordOrder},
    employee::Employee,
};

pub const SYSTEM_UPDATER: &str = "system";

const EMPLOYEE_COLUMNS: &str = r#"
    employee_id, first_name, last_name, phone_number, email, organization_id,
    job_title, hire_date, hire_status, is_admin, updated_at, updated_by, hashed_password
"#;

#[derive(Clone)]
pub struct MySqlAttendanceStore {
    pool: MySqlPool,
}

impl MySqlAttendanceStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceStore for MySqlAttendanceStore {
    async fn directed_events_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<DirectedEvent>> {
        let rows = sqlx::query_as::<_, DirectedEventRow>(
            r#"
            SELECT a.employee_id, a.access_time, a.gate_id, g.direction
            FROM access_log a
            JOIN gate g ON a.gate_id = g.gate_id
            WHERE a.access_time >= ?
            AND a.access_time < ?
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        debug!(rows = rows.len(), %start, %end, "Fetched access events");

        // Gates with a direction other than in/out never bound a shift
        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let gate_id = row.gate_id;
                DirectedEvent::try_from(row)
                    .map_err(|e| warn!(gate_id, error = %e, "Skipping event at misconfigured gate"))
                    .ok()
            })
            .collect())
    }

    async fn upsert_attendance(&self, records: Vec<DerivedAttendance>) -> AppResult<u64> {
        let mut tx = self.pool.begin().await?;

        for record in &records {
            let result = sqlx::query(
                r#"
                INSERT INTO attendance_record
                    (employee_id, report_date, check_in_time, check_out_time,
                     check_in_gate, check_out_gate, total_stay_hours, updated_by)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?) AS new
                ON DUPLICATE KEY UPDATE
                    check_in_time = new.check_in_time,
                    check_out_time = new.check_out_time,
                    check_in_gate = new.check_in_gate,
                    check_out_gate = new.check_out_gate,
                    total_stay_hours = new.total_stay_hours,
                    updated_by = new.updated_by
                "#,
            )
            .bind(&record.employee_id)
            .bind(record.report_date)
            .bind(record.check_in_time)
            .bind(record.check_out_time)
            .bind(record.check_in_gate)
            .bind(record.check_out_gate)
            .bind(record.total_stay_hours)
            .bind(SYSTEM_UPDATER)
            .execute(&mut *tx)
            .await;

            // Dropping the transaction on the early return rolls it back
            if let Err(e) = result {
                error!(
                    error = %e,
                    employee_id = %record.employee_id,
                    report_date = %record.report_date,
                    "Attendance upsert failed, rolling back"
                );
                return Err(e.into());
            }
        }

        tx.commit().await?;

        Ok(records.len() as u64)
    }

    async fn find_employee(&self, employee_id: &str) -> AppResult<Option<Employee>> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE employee_id = ?");

        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(employee_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(employee)
    }

    async fn employees_in_organization(&self, organization_id: &str) -> AppResult<Vec<Employee>> {
        let sql = format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE organization_id = ? ORDER BY employee_id"
        );

        let employees = sqlx::query_as::<_, Employee>(&sql)
            .bind(organization_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(employees)
    }

    async fn attendance_between(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
        order: RecordOrder,
    ) -> AppResult<Vec<AttendanceRecord>> {
        let order_by = match order {
            RecordOrder::Stored => "",
            RecordOrder::NewestFirst => "ORDER BY report_date DESC",
        };

        let sql = format!(
            r#"
            SELECT record_id, employee_id, report_date, check_in_time, check_out_time,
                   check_in_gate, check_out_gate, total_stay_hours, updated_by
            FROM attendance_record
            WHERE employee_id = ?
            AND report_date >= ?
            AND report_date < ?
            {order_by}
            "#
        );

        let records = sqlx::query_as::<_, AttendanceRecord>(&sql)
            .bind(employee_id)
            .bind(from)
            .bind(to)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }
}
