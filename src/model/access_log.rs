use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::gate::GateDirection;

/// A swipe joined with the direction of the gate it happened at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedEvent {
    pub employee_id: String,
    pub access_time: NaiveDateTime,
    pub gate_id: u32,
    pub direction: GateDirection,
}

#[derive(Debug, sqlx::FromRow)]
pub struct DirectedEventRow {
    pub employee_id: String,
    pub access_time: NaiveDateTime,
    pub gate_id: u32,
    pub direction: String,
}

impl TryFrom<DirectedEventRow> for DirectedEvent {
    type Error = String;

    fn try_from(row: DirectedEventRow) -> Result<Self, Self::Error> {
        Ok(DirectedEvent {
            direction: row.direction.parse()?,
            employee_id: row.employee_id,
            access_time: row.access_time,
            gate_id: row.gate_id,
        })
    }
}

/// One row of an employee's swipe history for a day
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct AccessLogEntry {
    #[schema(example = 42)]
    pub log_id: u64,
    #[schema(example = "2025-05-02T08:05:00", value_type = String, format = "date-time")]
    pub access_time: NaiveDateTime,
    #[schema(example = "in")]
    pub direction: String,
    #[schema(example = "North Lobby")]
    pub gate_name: String,
    #[schema(example = "turnstile")]
    pub gate_type: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccessLog {
    #[schema(example = "E001")]
    pub employee_id: String,
    #[schema(example = "2025-05-02T08:05:00")]
    pub access_time: String,
    #[schema(example = 1)]
    pub gate_id: u32,
}
