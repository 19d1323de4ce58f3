//! Repository Traits
//!
//! Interfaces to the external backend service. Implementations live in the
//! infrastructure layer.

use kernel::id::{EmployeeId, UserId};

use crate::domain::entity::{
    AuthUser, Employee, EmployeeChanges, NewEmployee, NewPayslip, NewUser, Payslip, UserRecord,
};
use crate::error::BackendResult;

/// Credential and account operations of the backend auth API
#[trait_variant::make(AuthGateway: Send)]
pub trait LocalAuthGateway {
    /// Verify email + password
    async fn sign_in_with_password(&self, email: &str, password: &str) -> BackendResult<AuthUser>;

    /// Register a new account
    async fn sign_up(&self, name: &str, email: &str, password: &str) -> BackendResult<AuthUser>;

    /// Exchange an OAuth authorization code for the account it belongs to
    async fn exchange_code_for_session(&self, code: &str) -> BackendResult<AuthUser>;

    /// Send a password recovery email
    async fn send_password_reset(&self, email: &str) -> BackendResult<()>;

    /// Replace the password of an account
    async fn update_password(&self, user_id: &UserId, new_password: &str) -> BackendResult<()>;
}

/// `users` table
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    async fn find_by_id(&self, user_id: &UserId) -> BackendResult<Option<UserRecord>>;

    async fn create(&self, user: &NewUser) -> BackendResult<()>;

    async fn count(&self) -> BackendResult<u64>;
}

/// `employees` table
#[trait_variant::make(EmployeeRepository: Send)]
pub trait LocalEmployeeRepository {
    async fn list(&self) -> BackendResult<Vec<Employee>>;

    /// Returns the created rows
    async fn create(&self, employee: &NewEmployee) -> BackendResult<Vec<Employee>>;

    /// Returns the updated rows
    async fn update(
        &self,
        employee_id: &EmployeeId,
        changes: &EmployeeChanges,
    ) -> BackendResult<Vec<Employee>>;

    async fn delete(&self, employee_id: &EmployeeId) -> BackendResult<()>;

    async fn count(&self) -> BackendResult<u64>;
}

/// `payslips` table
#[trait_variant::make(PayslipRepository: Send)]
pub trait LocalPayslipRepository {
    async fn list(&self) -> BackendResult<Vec<Payslip>>;

    /// Returns the created rows
    async fn create(&self, payslip: &NewPayslip) -> BackendResult<Vec<Payslip>>;

    /// Most recent payslips by `date`, newest first
    async fn recent(&self, limit: usize) -> BackendResult<Vec<Payslip>>;

    async fn count(&self) -> BackendResult<u64>;
}

/// Trivial read used by the health check
#[trait_variant::make(HealthCheck: Send)]
pub trait LocalHealthCheck {
    async fn ping(&self) -> BackendResult<()>;
}

/// Everything the router needs from one backend implementation
pub trait PayrollBackend:
    AuthGateway
    + UserRepository
    + EmployeeRepository
    + PayslipRepository
    + HealthCheck
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> PayrollBackend for T where
    T: AuthGateway
        + UserRepository
        + EmployeeRepository
        + PayslipRepository
        + HealthCheck
        + Clone
        + Send
        + Sync
        + 'static
{
}
