use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::db::mysql_store::SYSTEM_UPDATER;
use crate::db::store::AttendanceStore;
use crate::error::AppResult;
use crate::model::{
    access_log::DirectedEvent,
    attendance::{AttendanceRecord, DerivedAttendance, RecordOrder},
    employee::Employee,
    gate::GateDirection,
};

/// Store double with the same upsert semantics as the MySQL store.
#[derive(Default)]
pub struct MemoryAttendanceStore {
    gates: Mutex<HashMap<u32, GateDirection>>,
    events: Mutex<Vec<(String, NaiveDateTime, u32)>>,
    employees: Mutex<Vec<Employee>>,
    records: Mutex<Vec<AttendanceRecord>>,
}

impl MemoryAttendanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gates(self, gates: &[(u32, GateDirection)]) -> Self {
        self.gates.lock().unwrap().extend(gates.iter().copied());
        self
    }

    pub fn add_employee(&self, employee_id: &str, organization_id: &str) {
        self.employees.lock().unwrap().push(Employee {
            employee_id: employee_id.to_string(),
            first_name: "Test".to_string(),
            last_name: employee_id.to_string(),
            phone_number: "0911222333".to_string(),
            email: format!("{employee_id}@example.com"),
            organization_id: organization_id.to_string(),
            job_title: "Engineer".to_string(),
            hire_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            hire_status: "Active".to_string(),
            is_admin: false,
            updated_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_time(NaiveTime::MIN),
            updated_by: "system".to_string(),
            hashed_password: String::new(),
        });
    }

    pub fn swipe(&self, employee_id: &str, at: &str, gate_id: u32) {
        let at = NaiveDateTime::parse_from_str(at, "%Y-%m-%d %H:%M:%S").unwrap();
        self.events
            .lock()
            .unwrap()
            .push((employee_id.to_string(), at, gate_id));
    }

    pub fn set_password_hash(&self, employee_id: &str, hashed: &str) {
        for employee in self.employees.lock().unwrap().iter_mut() {
            if employee.employee_id == employee_id {
                employee.hashed_password = hashed.to_string();
            }
        }
    }

    pub fn insert_record(&self, record: AttendanceRecord) {
        self.records.lock().unwrap().push(record);
    }

    pub fn records(&self) -> Vec<AttendanceRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl AttendanceStore for MemoryAttendanceStore {
    async fn directed_events_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<DirectedEvent>> {
        let gates = self.gates.lock().unwrap();
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, at, _)| *at >= start && *at < end)
            .filter_map(|(employee_id, at, gate_id)| {
                gates.get(gate_id).map(|direction| DirectedEvent {
                    employee_id: employee_id.clone(),
                    access_time: *at,
                    gate_id: *gate_id,
                    direction: *direction,
                })
            })
            .collect())
    }

    async fn upsert_attendance(&self, records: Vec<DerivedAttendance>) -> AppResult<u64> {
        let mut stored = self.records.lock().unwrap();
        for r in &records {
            let existing = stored
                .iter_mut()
                .find(|s| s.employee_id == r.employee_id && s.report_date == r.report_date);
            match existing {
                Some(s) => {
                    s.check_in_time = Some(r.check_in_time);
                    s.check_out_time = Some(r.check_out_time);
                    s.check_in_gate = Some(r.check_in_gate);
                    s.check_out_gate = Some(r.check_out_gate);
                    s.total_stay_hours = Some(r.total_stay_hours);
                    s.updated_by = SYSTEM_UPDATER.to_string();
                }
                None => {
                    let record_id = stored.len() as u64 + 1;
                    stored.push(AttendanceRecord {
                        record_id,
                        employee_id: r.employee_id.clone(),
                        report_date: r.report_date,
                        check_in_time: Some(r.check_in_time),
                        check_out_time: Some(r.check_out_time),
                        check_in_gate: Some(r.check_in_gate),
                        check_out_gate: Some(r.check_out_gate),
                        total_stay_hours: Some(r.total_stay_hours),
                        updated_by: SYSTEM_UPDATER.to_string(),
                    });
                }
            }
        }
        Ok(records.len() as u64)
    }

    async fn find_employee(&self, employee_id: &str) -> AppResult<Option<Employee>> {
        Ok(self
            .employees
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.employee_id == employee_id)
            .cloned())
    }

    async fn employees_in_organization(&self, organization_id: &str) -> AppResult<Vec<Employee>> {
        Ok(self
            .employees
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.organization_id == organization_id)
            .cloned()
            .collect())
    }

    async fn attendance_between(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
        order: RecordOrder,
    ) -> AppResult<Vec<AttendanceRecord>> {
        let mut records: Vec<_> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.employee_id == employee_id && r.report_date >= from && r.report_date < to)
            .cloned()
            .collect();
        if order == RecordOrder::NewestFirst {
            records.sort_by(|a, b| b.report_date.cmp(&a.report_date));
        }
        Ok(records)
    }
}
