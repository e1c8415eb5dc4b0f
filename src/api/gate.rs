use crate::{auth::auth::AuthUser, error::AppError, model::gate::Gate};
use actix_web::{HttpResponse, web};
use sqlx::MySqlPool;

/// List gates and their directions
#[utoipa::path(
    get,
    path = "/api/v1/gates",
    responses(
        (status = 200, description = "All gates", body = [Gate])
    ),
    tag = "Access Log",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_gates(
    _auth: AuthUser,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse, AppError> {
    let gates = sqlx::query_as::<_, Gate>(
        "SELECT gate_id, gate_name, direction, gate_type FROM gate ORDER BY gate_id",
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(gates))
}
