use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Employee {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub organization_id: String,
    pub job_title: String,
    pub hire_date: NaiveDate,
    pub hire_status: String,
    pub is_admin: bool,
    pub updated_at: NaiveDateTime,
    pub updated_by: String,
    pub hashed_password: String,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "E001",
        "first_name": "John",
        "last_name": "Doe",
        "phone_number": "0911222333",
        "email": "john.doe@company.com",
        "organization_id": "ORG001",
        "job_title": "Engineer",
        "hire_date": "2024-01-01",
        "hire_status": "Active",
        "is_admin": false,
        "updated_at": "2024-01-01T00:00:00",
        "updated_by": "system"
    })
)]
pub struct EmployeeResponse {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub organization_id: String,
    pub job_title: String,
    #[schema(value_type = String, format = "date")]
    pub hire_date: NaiveDate,
    pub hire_status: String,
    pub is_admin: bool,
    #[schema(value_type = String, format = "date-time")]
    pub updated_at: NaiveDateTime,
    pub updated_by: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            employee_id: e.employee_id,
            first_name: e.first_name,
            last_name: e.last_name,
            phone_number: e.phone_number,
            email: e.email,
            organization_id: e.organization_id,
            job_title: e.job_title,
            hire_date: e.hire_date,
            hire_status: e.hire_status,
            is_admin: e.is_admin,
            updated_at: e.updated_at,
            updated_by: e.updated_by,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "E002")]
    pub employee_id: String,
    #[schema(example = "Jane")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "0911222444")]
    pub phone_number: String,
    #[schema(example = "jane@company.com", format = "email")]
    pub email: String,
    #[schema(example = "ORG001")]
    pub organization_id: String,
    #[schema(example = "Engineer")]
    pub job_title: String,
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub hire_date: NaiveDate,
    #[schema(example = "Active")]
    pub hire_status: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[schema(example = "s3cret!")]
    pub password: String,
}

/// Fields left out of the body keep their stored value
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateEmployee {
    #[schema(example = "Jane")]
    pub first_name: Option<String>,
    #[schema(example = "Doe")]
    pub last_name: Option<String>,
    #[schema(example = "0911222444")]
    pub phone_number: Option<String>,
    #[schema(example = "jane@company.com", format = "email")]
    pub email: Option<String>,
    #[schema(example = "ORG002")]
    pub organization_id: Option<String>,
    #[schema(example = "Senior Engineer")]
    pub job_title: Option<String>,
    #[schema(example = "2026-01-01", format = "date", value_type = Option<String>)]
    pub hire_date: Option<NaiveDate>,
    #[schema(example = "Active")]
    pub hire_status: Option<String>,
    pub is_admin: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ResetPassword {
    #[schema(example = "E002")]
    pub employee_id: String,
    #[schema(example = "s3cret!")]
    pub original_password: String,
    #[schema(example = "n3w-s3cret!")]
    pub new_password: String,
}
