//! HTTP Handlers

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use chrono::Utc;
use std::sync::Arc;

use platform::cookie::set_cookie_header;

use crate::application::config::PayrollConfig;
use crate::application::session::encode_session;
use crate::application::{
    CreateEmployeeInput, CreatePayslipInput, EmployeeUseCase, HealthUseCase, MetricsUseCase,
    OAuthCallbackUseCase, PasswordUseCase, PayslipUseCase, SignInInput, SignInUseCase,
    SignUpInput, SignUpUseCase, UpdateEmployeeInput,
};
use crate::domain::entity::SessionUser;
use crate::domain::guard::require_admin;
use crate::domain::repository::PayrollBackend;
use crate::error::{PayrollError, PayrollResult};
use crate::presentation::dto::{
    AuthResponse, CallbackQuery, EmployeeCreateRequest, EmployeeIdQuery, EmployeeUpdateRequest,
    LoginRequest, PayslipCreateRequest, ResetPasswordRequest, RoleResponse, SignUpRequest,
    SuccessResponse, UpdatePasswordRequest,
};
use crate::presentation::middleware::{LOGIN_PAGE, found};

/// Shared state for payroll handlers
#[derive(Clone)]
pub struct PayrollAppState<R>
where
    R: PayrollBackend,
{
    pub repo: Arc<R>,
    pub config: Arc<PayrollConfig>,
}

/// Sign `user` into a session cookie and attach it to `body`
fn with_session(config: &PayrollConfig, user: &SessionUser, body: impl IntoResponse) -> Response {
    let token = encode_session(config, user, Utc::now());
    let cookie = config.session_cookie().build_set_cookie(&token);

    ([(header::SET_COOKIE, set_cookie_header(&cookie))], body).into_response()
}

// ============================================================================
// Account
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<PayrollAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> PayrollResult<Response>
where
    R: PayrollBackend,
{
    let Json(req) = payload?;

    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone());
    let user = use_case
        .execute(SignInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    let body = Json(AuthResponse {
        success: true,
        role: user.role,
    });
    Ok(with_session(&state.config, &user, body))
}

/// POST /signup
pub async fn signup<R>(
    State(state): State<PayrollAppState<R>>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> PayrollResult<Response>
where
    R: PayrollBackend,
{
    let Json(req) = payload?;

    let use_case = SignUpUseCase::new(state.repo.clone(), state.repo.clone());
    let user = use_case
        .execute(SignUpInput {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;

    let body = Json(AuthResponse {
        success: true,
        role: user.role,
    });
    Ok(with_session(&state.config, &user, body))
}

/// GET /logout
pub async fn logout<R>(State(state): State<PayrollAppState<R>>) -> Response
where
    R: PayrollBackend,
{
    let cookie = state.config.session_cookie().build_delete_cookie();

    (
        [(header::SET_COOKIE, set_cookie_header(&cookie))],
        found("/"),
    )
        .into_response()
}

/// GET /callback?code=...
pub async fn callback<R>(
    State(state): State<PayrollAppState<R>>,
    query: Result<Query<CallbackQuery>, QueryRejection>,
) -> Response
where
    R: PayrollBackend,
{
    let Some(code) = query.ok().and_then(|Query(q)| q.code) else {
        tracing::debug!("Callback without code");
        return found(LOGIN_PAGE);
    };

    let use_case = OAuthCallbackUseCase::new(state.repo.clone(), state.repo.clone());
    match use_case.execute(&code).await {
        Ok(user) => with_session(&state.config, &user, found("/work")),
        Err(e) => {
            tracing::warn!(error = %e, "OAuth callback failed");
            found(LOGIN_PAGE)
        }
    }
}

/// POST /reset-password
pub async fn reset_password<R>(
    State(state): State<PayrollAppState<R>>,
    payload: Result<Json<ResetPasswordRequest>, JsonRejection>,
) -> PayrollResult<Json<SuccessResponse>>
where
    R: PayrollBackend,
{
    let Json(req) = payload?;

    PasswordUseCase::new(state.repo.clone())
        .reset(&req.email)
        .await?;

    Ok(Json(SuccessResponse::ok()))
}

/// POST /update-password
pub async fn update_password<R>(
    State(state): State<PayrollAppState<R>>,
    Extension(user): Extension<SessionUser>,
    payload: Result<Json<UpdatePasswordRequest>, JsonRejection>,
) -> PayrollResult<Json<SuccessResponse>>
where
    R: PayrollBackend,
{
    let Json(req) = payload?;

    PasswordUseCase::new(state.repo.clone())
        .update(&user, &req.new_password)
        .await?;

    Ok(Json(SuccessResponse::ok()))
}

/// GET /api/user-role
pub async fn user_role(Extension(user): Extension<SessionUser>) -> Json<RoleResponse> {
    Json(RoleResponse { role: user.role })
}

// ============================================================================
// Employees
// ============================================================================

/// GET /api/employees
pub async fn list_employees<R>(State(state): State<PayrollAppState<R>>) -> PayrollResult<Response>
where
    R: PayrollBackend,
{
    let employees = EmployeeUseCase::new(state.repo.clone()).list().await?;
    Ok(Json(employees).into_response())
}

/// POST /api/employees (admin)
pub async fn create_employee<R>(
    State(state): State<PayrollAppState<R>>,
    Extension(user): Extension<SessionUser>,
    payload: Result<Json<EmployeeCreateRequest>, JsonRejection>,
) -> PayrollResult<Response>
where
    R: PayrollBackend,
{
    require_admin(&user)?;
    let Json(req) = payload?;

    let created = EmployeeUseCase::new(state.repo.clone())
        .create(
            &user,
            CreateEmployeeInput {
                name: req.name,
                position: req.position,
                fields: req.fields,
            },
        )
        .await?;

    Ok(Json(created).into_response())
}

/// PUT /api/employees (admin)
pub async fn update_employee<R>(
    State(state): State<PayrollAppState<R>>,
    Extension(user): Extension<SessionUser>,
    payload: Result<Json<EmployeeUpdateRequest>, JsonRejection>,
) -> PayrollResult<Response>
where
    R: PayrollBackend,
{
    require_admin(&user)?;
    let Json(req) = payload?;

    let id = req
        .id
        .ok_or_else(|| PayrollError::InvalidInput("Employee id is required".to_string()))?;

    let updated = EmployeeUseCase::new(state.repo.clone())
        .update(
            &user,
            UpdateEmployeeInput {
                id,
                fields: req.fields,
            },
        )
        .await?;

    Ok(Json(updated).into_response())
}

/// DELETE /api/employees?id=... (admin)
pub async fn delete_employee<R>(
    State(state): State<PayrollAppState<R>>,
    Extension(user): Extension<SessionUser>,
    query: Result<Query<EmployeeIdQuery>, QueryRejection>,
) -> PayrollResult<Json<SuccessResponse>>
where
    R: PayrollBackend,
{
    require_admin(&user)?;

    let id = query
        .ok()
        .and_then(|Query(q)| q.id)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| PayrollError::InvalidInput("Employee id is required".to_string()))?;

    EmployeeUseCase::new(state.repo.clone())
        .delete(&user, &id.into())
        .await?;

    Ok(Json(SuccessResponse::ok()))
}

// ============================================================================
// Payslips
// ============================================================================

/// GET /api/payslips
pub async fn list_payslips<R>(State(state): State<PayrollAppState<R>>) -> PayrollResult<Response>
where
    R: PayrollBackend,
{
    let payslips = PayslipUseCase::new(state.repo.clone()).list().await?;
    Ok(Json(payslips).into_response())
}

/// POST /api/payslips
pub async fn create_payslip<R>(
    State(state): State<PayrollAppState<R>>,
    Extension(user): Extension<SessionUser>,
    payload: Result<Json<PayslipCreateRequest>, JsonRejection>,
) -> PayrollResult<Response>
where
    R: PayrollBackend,
{
    let Json(req) = payload?;

    let created = PayslipUseCase::new(state.repo.clone())
        .create(
            &user,
            CreatePayslipInput {
                employee_id: req.employee_id,
                amount: req.amount,
                fields: req.fields,
            },
        )
        .await?;

    Ok(Json(created).into_response())
}

// ============================================================================
// Operations
// ============================================================================

/// GET /health
pub async fn health<R>(State(state): State<PayrollAppState<R>>) -> Response
where
    R: PayrollBackend,
{
    let report = HealthUseCase::new(state.repo.clone())
        .check(&state.config.environment)
        .await;

    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(report)).into_response()
}

/// GET /metrics (admin)
pub async fn metrics<R>(
    State(state): State<PayrollAppState<R>>,
    Extension(user): Extension<SessionUser>,
) -> PayrollResult<Response>
where
    R: PayrollBackend,
{
    require_admin(&user)?;

    let report = MetricsUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone())
        .collect()
        .await?;

    Ok(Json(report).into_response())
}

/// Fallback for unmatched routes
pub async fn not_found() -> PayrollError {
    PayrollError::NotFound
}

/// Fallback for a known path hit with an unsupported method
pub async fn method_not_allowed() -> PayrollError {
    PayrollError::MethodNotAllowed
}
