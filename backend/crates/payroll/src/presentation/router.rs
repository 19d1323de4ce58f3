//! Payroll Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::PayrollConfig;
use crate::domain::repository::PayrollBackend;
use crate::infra::supabase::SupabaseClient;
use crate::presentation::handlers::{self, PayrollAppState};
use crate::presentation::middleware::{require_api_session, require_page_session};
use crate::presentation::pages;

/// Create the Payroll router backed by the Supabase service
pub fn payroll_router(client: SupabaseClient, config: PayrollConfig) -> Router {
    payroll_router_generic(client, config)
}

/// Create a generic Payroll router for any backend implementation
pub fn payroll_router_generic<R>(repo: R, config: PayrollConfig) -> Router
where
    R: PayrollBackend,
{
    let config = Arc::new(config);
    let state = PayrollAppState {
        repo: Arc::new(repo),
        config: config.clone(),
    };

    let public_routes = Router::new()
        .route("/", get(pages::index))
        .route("/login", get(pages::login_page).post(handlers::login::<R>))
        .route("/signup", post(handlers::signup::<R>))
        .route("/logout", get(handlers::logout::<R>))
        .route("/callback", get(handlers::callback::<R>))
        .route("/reset-password", post(handlers::reset_password::<R>))
        .route("/health", get(handlers::health::<R>));

    let page_routes = Router::new()
        .route("/work", get(pages::work_page))
        .route_layer(middleware::from_fn_with_state(
            config.clone(),
            require_page_session,
        ));

    let api_routes = Router::new()
        .route("/update-password", post(handlers::update_password::<R>))
        .route("/api/user-role", get(handlers::user_role))
        .route(
            "/api/employees",
            get(handlers::list_employees::<R>)
                .post(handlers::create_employee::<R>)
                .put(handlers::update_employee::<R>)
                .delete(handlers::delete_employee::<R>),
        )
        .route(
            "/api/payslips",
            get(handlers::list_payslips::<R>).post(handlers::create_payslip::<R>),
        )
        .route("/metrics", get(handlers::metrics::<R>))
        .route_layer(middleware::from_fn_with_state(config, require_api_session));

    Router::new()
        .merge(public_routes)
        .merge(page_routes)
        .merge(api_routes)
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
}
