use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct LoginReqDto {
    #[schema(example = "E001")]
    pub employee_id: String,
    #[schema(example = "s3cret!")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub employee_id: String,
    pub is_admin: bool,
    /// True when the employee manages their own organization
    pub is_manager: bool,
    pub hire_status: String,
    pub exp: usize,
    pub jti: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub jwt_token: String,
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "john.doe@company.com")]
    pub email: String,
    #[schema(example = "0911222333")]
    pub phone_number: String,
    #[schema(example = "Engineer")]
    pub job_title: String,
    #[schema(example = "ORG001")]
    pub organization_id: String,
    #[schema(example = "R&D Dept")]
    pub organization_name: String,
}
