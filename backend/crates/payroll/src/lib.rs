//! Payroll Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, role value object, guards, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - Supabase REST client (plus an in-memory backend for tests)
//! - `presentation/` - HTTP handlers, DTOs, session middleware, router
//!
//! ## Features
//! - Email + password login delegated to the backend's auth API
//! - Signed cookie sessions carrying `{id, email, role}`
//! - Employee CRUD (writes admin-only) and payslip create/list
//! - Health and metrics endpoints
//!
//! ## Security Model
//! - The session cookie is HMAC-SHA256 signed and expires server-side
//! - Every request is authorized from the session alone
//! - Employee writes require the `admin` role

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::PayrollConfig;
pub use error::{BackendError, BackendResult, PayrollError, PayrollResult};
#[cfg(test)]
pub use infra::memory::InMemoryBackend;
pub use infra::supabase::SupabaseClient;
pub use presentation::router::{payroll_router, payroll_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
