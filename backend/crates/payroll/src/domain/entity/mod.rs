//! Entities
//!
//! Records are owned by the backend. Employee and payslip rows are carried
//! verbatim; the insert and update payloads are typed.

pub mod employee;
pub mod payslip;
pub mod record;
pub mod session_user;
pub mod user;

pub use employee::{Employee, EmployeeChanges, NewEmployee};
pub use payslip::{NewPayslip, Payslip};
pub use session_user::SessionUser;
pub use user::{AuthUser, NewUser, UserRecord};
