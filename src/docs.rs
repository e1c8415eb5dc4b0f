use crate::api::organization::OrganizationDetail;
use crate::attendance::EmployeeAttendanceReport;
use crate::attendance::report::{ArrivalStatus, AttendanceReportRow, DepartureStatus};
use crate::model::access_log::{AccessLogEntry, CreateAccessLog};
use crate::model::employee::{CreateEmployee, EmployeeResponse, ResetPassword, UpdateEmployee};
use crate::model::gate::{Gate, GateDirection};
use crate::model::organization::{Organization, OrganizationSummary};
use crate::models::{LoginReqDto, LoginResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, openapi};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gate Attendance API",
        version = "1.0.0",
        description = r#"
## Gate-based Attendance

Employees badge through gates. Each gate is marked **in** or **out**.
Once a day the swipes are folded into one attendance record per employee:

- **check-in** is the earliest swipe at an *in* gate
- **check-out** is the latest swipe at an *out* gate
- **total stay** is the gap between them, in hours rounded to two decimals

Monthly reports flag arrivals after 08:30 as **Late** and departures before 17:30 as **Early**.

### 🔐 Security
Everything under `/api/v1` except login needs a **JWT Bearer** token from `POST /api/v1/auth/login`.
Employees see their own records. Managers and admins see everyone.
Only admins can trigger derivation or create employees.
"#,
    ),
    paths(
        crate::auth::handlers::login,

        crate::api::attendance::update_attendance,
        crate::api::attendance::get_employee_attendance,
        crate::api::attendance::get_organization_attendance,

        crate::api::access_log::create_access_log,
        crate::api::access_log::list_employee_access_logs,
        crate::api::gate::list_gates,

        crate::api::employee::create_employee,
        crate::api::employee::get_employee,
        crate::api::employee::update_employee,
        crate::api::employee::reset_password,

        crate::api::organization::list_organizations,
        crate::api::organization::get_organization
    ),
    components(
        schemas(
            LoginReqDto,
            LoginResponse,
            EmployeeAttendanceReport,
            AttendanceReportRow,
            ArrivalStatus,
            DepartureStatus,
            AccessLogEntry,
            CreateAccessLog,
            Gate,
            GateDirection,
            CreateEmployee,
            EmployeeResponse,
            UpdateEmployee,
            ResetPassword,
            Organization,
            OrganizationSummary,
            OrganizationDetail
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "Auth", description = "Login and token issue"),
        (name = "Attendance", description = "Attendance derivation and monthly reports"),
        (name = "Access Log", description = "Gate swipes"),
        (name = "Employee", description = "Employee directory"),
        (name = "Organization", description = "Organization directory"),
    )
)]
pub struct ApiDoc;

