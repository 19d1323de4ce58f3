//! API DTOs (Data Transfer Objects)

use kernel::id::EmployeeId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::domain::value_object::UserRole;

// ============================================================================
// Account
// ============================================================================

/// POST /login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /signup
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /reset-password
#[derive(Debug, Clone, Deserialize)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub email: String,
}

/// POST /update-password
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePasswordRequest {
    #[serde(default)]
    pub new_password: String,
}

/// Login and signup response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// GET /api/user-role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleResponse {
    pub role: UserRole,
}

/// GET /callback
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
}

// ============================================================================
// Employees
// ============================================================================

/// POST /api/employees
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeCreateRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// PUT /api/employees
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeUpdateRequest {
    #[serde(default)]
    pub id: Option<EmployeeId>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// DELETE /api/employees?id=...
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeIdQuery {
    pub id: Option<String>,
}

// ============================================================================
// Payslips
// ============================================================================

/// POST /api/payslips
#[derive(Debug, Clone, Deserialize)]
pub struct PayslipCreateRequest {
    pub employee_id: EmployeeId,
    pub amount: Number,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
