pub mod derivation;
pub mod report;
pub mod scheduler;

pub use derivation::{DerivationOutcome, TargetDay, derive_attendance};
pub use report::{EmployeeAttendanceReport, employee_attendance, organization_attendance};
