use crate::auth::auth::AuthUser;
use crate::error::AppError;
use crate::model::access_log::{AccessLogEntry, CreateAccessLog};
use crate::utils::time_utils::{day_window, parse_access_time, parse_date};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use sqlx::MySqlPool;
use tracing::{debug, info};
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct LogDateQuery {
    /// Day to list (YYYY-MM-DD)
    #[param(example = "2025-05-02")]
    pub date: Option<String>,
}

/// Record a badge swipe
#[utoipa::path(
    post,
    path = "/api/v1/access-logs",
    request_body = CreateAccessLog,
    responses(
        (status = 201, description = "Swipe recorded", body = Object, example = json!({
            "message": "Access log created"
        })),
        (status = 400, description = "Missing or malformed field"),
        (status = 404, description = "Unknown employee or gate")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Access Log"
)]
pub async fn create_access_log(
    _auth: AuthUser,
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateAccessLog>,
) -> Result<HttpResponse, AppError> {
    let employee_id = payload.employee_id.trim();
    if employee_id.is_empty() {
        return Err(AppError::Validation("employee_id is required".into()));
    }
    let access_time = parse_access_time(&payload.access_time)?;

    let gates = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM gate WHERE gate_id = ?")
        .bind(payload.gate_id)
        .fetch_one(pool.get_ref())
        .await?;
    if gates == 0 {
        return Err(AppError::NotFound(format!("Gate {} not found", payload.gate_id)));
    }

    let employees =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employee WHERE employee_id = ?")
            .bind(employee_id)
            .fetch_one(pool.get_ref())
            .await?;
    if employees == 0 {
        return Err(AppError::NotFound("Employee not found".into()));
    }

    sqlx::query("INSERT INTO access_log (employee_id, access_time, gate_id) VALUES (?, ?, ?)")
        .bind(employee_id)
        .bind(access_time)
        .bind(payload.gate_id)
        .execute(pool.get_ref())
        .await?;

    info!(employee_id, %access_time, gate_id = payload.gate_id, "Access log created");

    Ok(HttpResponse::Created().json(json!({
        "message": "Access log created"
    })))
}

/// Swipes of one employee on one day, with gate details
#[utoipa::path(
    get,
    path = "/api/v1/access-logs/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID"),
        LogDateQuery
    ),
    responses(
        (status = 200, description = "Swipes in time order", body = Object, example = json!({
            "logs": [{
                "log_id": 42,
                "access_time": "2025-05-02T08:05:00",
                "direction": "in",
                "gate_name": "North Lobby",
                "gate_type": "turnstile"
            }]
        })),
        (status = 400, description = "Missing or malformed date"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Access Log"
)]
pub async fn list_employee_access_logs(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<String>,
    query: web::Query<LogDateQuery>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();
    auth.require_self_or_privileged(&employee_id)?;

    let date = query
        .date
        .as_deref()
        .ok_or_else(|| AppError::Validation("date is required (YYYY-MM-DD)".into()))
        .and_then(parse_date)?;
    let (start, end) = day_window(date)?;

    let logs = sqlx::query_as::<_, AccessLogEntry>(
        r#"
        SELECT a.log_id, a.access_time, g.direction, g.gate_name, g.gate_type
        FROM access_log a
        JOIN gate g ON a.gate_id = g.gate_id
        WHERE a.employee_id = ?
        AND a.access_time >= ?
        AND a.access_time < ?
        ORDER BY a.access_time, a.log_id
        "#,
    )
    .bind(&employee_id)
    .bind(start)
    .bind(end)
    .fetch_all(pool.get_ref())
    .await?;

    debug!(%employee_id, %date, count = logs.len(), "Fetched access logs");

    Ok(HttpResponse::Ok().json(json!({ "logs": logs })))
}
