pub mod access_log;
pub mod attendance;
pub mod employee;
pub mod gate;
pub mod organization;
