//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod employees;
pub mod health;
pub mod metrics;
pub mod oauth_callback;
pub mod password;
pub mod payslips;
pub mod session;
pub mod sign_in;
pub mod sign_up;

// Re-exports
pub use config::PayrollConfig;
pub use employees::{CreateEmployeeInput, EmployeeUseCase, UpdateEmployeeInput};
pub use health::{DatabaseStatus, HealthReport, HealthStatus, HealthUseCase};
pub use metrics::{MetricsReport, MetricsUseCase, RECENT_PAYSLIPS};
pub use oauth_callback::OAuthCallbackUseCase;
pub use password::PasswordUseCase;
pub use payslips::{CreatePayslipInput, PayslipUseCase};
pub use sign_in::{SignInInput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpUseCase};
