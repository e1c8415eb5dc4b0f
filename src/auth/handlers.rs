use crate::{
    auth::{
        jwt::{TokenSubject, generate_access_token},
        password::verify_password,
    },
    config::Config,
    error::AppError,
    models::{LoginReqDto, LoginResponse},
};
use actix_web::{HttpResponse, web};
use sqlx::MySqlPool;
use tracing::{debug, info, instrument};

#[derive(sqlx::FromRow)]
struct LoginRow {
    employee_id: String,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    job_title: String,
    organization_id: String,
    hire_status: String,
    is_admin: bool,
    hashed_password: String,
    organization_name: Option<String>,
    manager_id: Option<String>,
}

/// Employee login
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginReqDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 400, description = "Missing credentials"),
        (status = 401, description = "Invalid credentials"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Auth"
)]
#[instrument(
    name = "auth_login",
    skip(pool, config, user),
    fields(employee_id = %user.employee_id)
)]
pub async fn login(
    user: web::Json<LoginReqDto>,
    pool: web::Data<MySqlPool>,
    config: web::Data<Config>,
) -> Result<HttpResponse, AppError> {
    info!("Login request received");

    // 1️⃣ Basic validation
    if user.employee_id.trim().is_empty() || user.password.is_empty() {
        info!("Validation failed: empty employee_id or password");
        return Err(AppError::Validation(
            "employee_id and password are required".into(),
        ));
    }

    // 2️⃣ Fetch employee with their organization
    debug!("Fetching employee from database");

    let row = sqlx::query_as::<_, LoginRow>(
        r#"
        SELECT e.employee_id, e.first_name, e.last_name, e.email, e.phone_number,
               e.job_title, e.organization_id, e.hire_status, e.is_admin, e.hashed_password,
               o.organization_name, o.manager_id
        FROM employee e
        LEFT JOIN organization o ON o.organization_id = e.organization_id
        WHERE e.employee_id = ?
        "#,
    )
    .bind(user.employee_id.trim())
    .fetch_optional(pool.get_ref())
    .await?
    .ok_or_else(|| AppError::NotFound("Employee not found.".into()))?;

    // 3️⃣ Verify password
    if let Err(e) = verify_password(&user.password, &row.hashed_password) {
        info!(error = %e, "Invalid credentials: password mismatch");
        return Err(AppError::Unauthorized("Incorrect password.".into()));
    }

    let organization_name = row
        .organization_name
        .ok_or_else(|| AppError::Unauthorized("Organization can't be found.".into()))?;
    let is_manager = row.manager_id.as_deref() == Some(row.employee_id.as_str());

    // 4️⃣ Generate access token
    debug!(is_manager, is_admin = row.is_admin, "Generating access token");

    let jwt_token = generate_access_token(
        TokenSubject {
            employee_id: &row.employee_id,
            is_admin: row.is_admin,
            is_manager,
            hire_status: &row.hire_status,
        },
        &config.jwt_secret,
        config.access_token_ttl,
    )
    .map_err(|e| AppError::Internal(format!("Failed to issue token: {e}")))?;

    info!("Login successful");

    Ok(HttpResponse::Ok().json(LoginResponse {
        jwt_token,
        first_name: row.first_name,
        last_name: row.last_name,
        email: row.email,
        phone_number: row.phone_number,
        job_title: row.job_title,
        organization_id: row.organization_id,
        organization_name,
    }))
}
