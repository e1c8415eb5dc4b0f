use crate::attendance::{
    EmployeeAttendanceReport, TargetDay, derive_attendance, employee_attendance,
    organization_attendance,
};
use crate::auth::auth::AuthUser;
use crate::db::AttendanceStore;
use crate::error::AppError;
use crate::utils::time_utils::{current_year_month, parse_date};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct DerivationQuery {
    /// Day to derive (YYYY-MM-DD); defaults to today
    #[param(example = "2025-05-02")]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct MonthQuery {
    /// Month to report (YYYY-MM); defaults to the current month
    #[param(example = "2025-05")]
    pub month: Option<String>,
}

impl MonthQuery {
    fn month_or_current(&self) -> String {
        self.month.clone().unwrap_or_else(current_year_month)
    }
}

/// Derive attendance records from the day's gate swipes
#[utoipa::path(
    put,
    path = "/api/v1/attendance/update",
    params(DerivationQuery),
    responses(
        (status = 200, description = "Attendance derived", body = Object, example = json!({
            "message": "Attendance updated for 2025-05-02",
            "total": 12,
            "date": "2025-05-02"
        })),
        (status = 400, description = "Malformed date", body = Object, example = json!({
            "error": "Invalid date format. Use YYYY-MM-DD."
        })),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Persistence failure, nothing was written")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendance"
)]
pub async fn update_attendance(
    auth: AuthUser,
    store: web::Data<dyn AttendanceStore>,
    query: web::Query<DerivationQuery>,
) -> Result<HttpResponse, AppError> {
    auth.require_admin()?;

    let date = query.date.as_deref().map(parse_date).transpose()?;
    let outcome = derive_attendance(store.get_ref(), TargetDay::from(date)).await?;

    info!(
        triggered_by = %auth.employee_id,
        date = %outcome.date_processed,
        total = outcome.records_affected,
        "Attendance update triggered"
    );

    Ok(HttpResponse::Ok().json(json!({
        "message": format!("Attendance updated for {}", outcome.date_processed),
        "total": outcome.records_affected,
        "date": outcome.date_processed,
    })))
}

/// Monthly attendance of one employee
#[utoipa::path(
    get,
    path = "/api/v1/attendance/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID"),
        MonthQuery
    ),
    responses(
        (status = 200, description = "Attendance report", body = EmployeeAttendanceReport),
        (status = 400, description = "Malformed month", body = Object, example = json!({
            "error": "Invalid month format. Use YYYY-MM."
        })),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Employee not found"
        }))
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendance"
)]
pub async fn get_employee_attendance(
    auth: AuthUser,
    store: web::Data<dyn AttendanceStore>,
    path: web::Path<String>,
    query: web::Query<MonthQuery>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();
    auth.require_self_or_privileged(&employee_id)?;

    let report = employee_attendance(store.get_ref(), &employee_id, &query.month_or_current()).await?;

    Ok(HttpResponse::Ok().json(report))
}

/// Monthly attendance of every employee in an organization
#[utoipa::path(
    get,
    path = "/api/v1/attendance/organizations/{organization_id}",
    params(
        ("organization_id", Path, description = "Organization ID"),
        MonthQuery
    ),
    responses(
        (status = 200, description = "One report per employee, possibly empty", body = [EmployeeAttendanceReport]),
        (status = 400, description = "Malformed month"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendance"
)]
pub async fn get_organization_attendance(
    auth: AuthUser,
    store: web::Data<dyn AttendanceStore>,
    path: web::Path<String>,
    query: web::Query<MonthQuery>,
) -> Result<HttpResponse, AppError> {
    auth.require_admin_or_manager()?;

    let organization_id = path.into_inner();
    let reports =
        organization_attendance(store.get_ref(), &organization_id, &query.month_or_current())
            .await?;

    Ok(HttpResponse::Ok().json(reports))
}
